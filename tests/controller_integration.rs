//! Integration tests: Controller → decision engine → actuator writes.
//!
//! Drives the controller through a mock hardware adapter and a manually
//! advanced clock, asserting on the full write history — no real GPIO,
//! no wall-clock waits.

use dustgate::app::events::AppEvent;
use dustgate::app::ports::{ActuatorPort, EventSink, SwitchPort};
use dustgate::app::service::Controller;
use dustgate::clock::SimClock;
use dustgate::config::SystemConfig;
use dustgate::signals::{Actuator, ActuatorSet, LineLevels, MachineRequest};

// ── Mock implementations ──────────────────────────────────────

/// Scriptable switch lines + recorded actuator writes.
struct MockHw {
    levels: LineLevels,
    writes: Vec<ActuatorSet>,
}

impl MockHw {
    fn new() -> Self {
        Self {
            levels: LineLevels::quiescent(),
            writes: Vec::new(),
        }
    }

    /// Close a gate switch (line pulled low).
    fn press(&mut self, request: MachineRequest) {
        self.levels.set(request, false);
    }

    /// Release a gate switch (pull-up raises the line).
    fn release(&mut self, request: MachineRequest) {
        self.levels.set(request, true);
    }

    fn release_all(&mut self) {
        self.levels = LineLevels::quiescent();
    }

    fn last_write(&self) -> Option<ActuatorSet> {
        self.writes.last().copied()
    }
}

impl SwitchPort for MockHw {
    fn sample(&mut self) -> LineLevels {
        self.levels
    }
}

impl ActuatorPort for MockHw {
    fn apply(&mut self, outputs: ActuatorSet) {
        self.writes.push(outputs);
    }
}

struct RecordingSink {
    events: Vec<AppEvent>,
}

impl RecordingSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }

    fn linger_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::LingerScheduled { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

fn make_controller(clock: &SimClock) -> (Controller, MockHw, RecordingSink) {
    let config = SystemConfig::default();
    let mut controller = Controller::new(&config, clock);
    let hw = MockHw::new();
    let mut sink = RecordingSink::new();
    controller.start(&mut sink);
    (controller, hw, sink)
}

fn set(actuators: &[Actuator]) -> ActuatorSet {
    actuators
        .iter()
        .fold(ActuatorSet::ALL_OFF, |acc, a| acc.with(*a))
}

// ── End-to-end: table saw session, then idle linger ───────────

#[test]
fn table_saw_session_tick_for_tick() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    hw.press(MachineRequest::TableSaw);

    // Tick 1: main trunk gate opens first (lowest bit).
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(controller.target(), set(&[Actuator::MainTrunkGate, Actuator::CollectorMotor]));
    assert_eq!(hw.last_write(), Some(set(&[Actuator::MainTrunkGate])));

    // Still within the cadence second: nothing more moves.
    clock.advance_ms(500);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(hw.writes.len(), 1);

    // Tick 2 (one second after the first flip): motor starts.
    clock.advance_ms(500);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(
        hw.last_write(),
        Some(set(&[Actuator::MainTrunkGate, Actuator::CollectorMotor]))
    );

    // Stable thereafter: zero further writes.
    for _ in 0..50 {
        clock.advance_secs(1);
        controller.tick(&mut hw, &clock, &mut sink);
    }
    assert_eq!(hw.writes.len(), 2, "converged state must not rewrite outputs");

    // Saw switches off: motor keeps running, gates frozen, shutoff
    // scheduled ten seconds out.
    hw.release_all();
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(controller.target(), set(&[Actuator::MainTrunkGate]));
    assert_eq!(sink.linger_count(), 1);

    // One second in: deadline not yet due, motor still on.
    clock.advance_secs(1);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(hw.writes.len(), 2);
    assert!(controller.outputs().contains(Actuator::CollectorMotor));

    // Ten seconds in: motor drops, main trunk gate stays open for good.
    clock.advance_secs(9);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(hw.last_write(), Some(set(&[Actuator::MainTrunkGate])));

    for _ in 0..100 {
        clock.advance_secs(1);
        controller.tick(&mut hw, &clock, &mut sink);
    }
    assert_eq!(hw.writes.len(), 3);
    assert!(controller.outputs().contains(Actuator::MainTrunkGate));
}

// ── Stagger bound ─────────────────────────────────────────────

#[test]
fn full_run_takes_one_cadence_tick_per_actuator() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    // Miter saw needs four actuators from all-off.
    hw.press(MachineRequest::MiterSaw);

    let mut flips = 0;
    while controller.outputs() != controller.target() || flips == 0 {
        let before = hw.writes.len();
        controller.tick(&mut hw, &clock, &mut sink);
        let wrote = hw.writes.len() - before;
        assert!(wrote <= 1, "no two actuators may change in one tick");
        flips += wrote;
        clock.advance_secs(1);
    }
    assert_eq!(flips, 4);

    // Each successive write differs from its predecessor by one bit.
    for pair in hw.writes.windows(2) {
        assert_eq!(pair[0].diff(pair[1]).count(), 1);
    }
}

// ── Priority preemption ───────────────────────────────────────

#[test]
fn drill_press_preempts_running_miter_saw() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    hw.press(MachineRequest::MiterSaw);
    for _ in 0..6 {
        controller.tick(&mut hw, &clock, &mut sink);
        clock.advance_secs(1);
    }
    assert_eq!(
        controller.outputs(),
        set(&[
            Actuator::MainTrunkGate,
            Actuator::MiterSawPlanerTrunkGate,
            Actuator::MiterSawGate,
            Actuator::CollectorMotor,
        ])
    );

    // Drill press wins while the miter saw is still asserted.
    hw.press(MachineRequest::DrillPressOrRouter);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(
        controller.target(),
        set(&[Actuator::DrillRouterTrunkGate, Actuator::CollectorMotor])
    );

    // Convergence walks one actuator per second toward the new run.
    for _ in 0..6 {
        clock.advance_secs(1);
        controller.tick(&mut hw, &clock, &mut sink);
    }
    assert_eq!(
        controller.outputs(),
        set(&[Actuator::DrillRouterTrunkGate, Actuator::CollectorMotor])
    );
}

// ── Delayed-reopen coupling ───────────────────────────────────

#[test]
fn request_during_linger_window_waits_for_the_linger_deadline() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    // Run the table saw to steady state, then release it.
    hw.press(MachineRequest::TableSaw);
    for _ in 0..4 {
        controller.tick(&mut hw, &clock, &mut sink);
        clock.advance_secs(1);
    }
    hw.release_all();
    controller.tick(&mut hw, &clock, &mut sink); // linger scheduled: now + 10s
    let writes_at_linger = hw.writes.len();

    // Three seconds into the window the planer starts up.  The target
    // tracks it immediately...
    clock.advance_secs(3);
    hw.press(MachineRequest::Planer);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(
        controller.target(),
        set(&[
            Actuator::MainTrunkGate,
            Actuator::MiterSawPlanerTrunkGate,
            Actuator::CollectorMotor,
        ])
    );

    // ...but nothing physical moves until the original deadline passes.
    for _ in 0..6 {
        clock.advance_secs(1);
        controller.tick(&mut hw, &clock, &mut sink);
        assert_eq!(hw.writes.len(), writes_at_linger, "held by linger deadline");
    }

    // t = 10s after linger scheduling: the sequencer resumes.
    clock.advance_secs(1);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(hw.writes.len(), writes_at_linger + 1);

    clock.advance_secs(1);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(
        controller.outputs(),
        set(&[
            Actuator::MainTrunkGate,
            Actuator::MiterSawPlanerTrunkGate,
            Actuator::CollectorMotor,
        ])
    );
}

// ── Linger repeats cleanly across sessions ────────────────────

#[test]
fn linger_schedules_once_per_idle_period() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    hw.press(MachineRequest::TableSaw);
    for _ in 0..4 {
        controller.tick(&mut hw, &clock, &mut sink);
        clock.advance_secs(1);
    }

    hw.release_all();
    // Many idle iterations inside the window: the deadline stands.
    for _ in 0..20 {
        controller.tick(&mut hw, &clock, &mut sink);
        clock.advance_ms(100);
    }
    assert_eq!(sink.linger_count(), 1);

    // After shutoff, a second session lingers again.
    clock.advance_secs(10);
    controller.tick(&mut hw, &clock, &mut sink);
    assert!(!controller.outputs().contains(Actuator::CollectorMotor));

    hw.press(MachineRequest::TableSaw);
    for _ in 0..4 {
        controller.tick(&mut hw, &clock, &mut sink);
        clock.advance_secs(1);
    }
    hw.release_all();
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(sink.linger_count(), 2);
}

// ── Released-before-motor-start edge ──────────────────────────

#[test]
fn request_released_mid_ramp_still_starts_then_lingers() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    // Table saw blips on for under a second: only the gate has moved.
    hw.press(MachineRequest::TableSaw);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(hw.last_write(), Some(set(&[Actuator::MainTrunkGate])));

    hw.release(MachineRequest::TableSaw);
    clock.advance_secs(1);
    controller.tick(&mut hw, &clock, &mut sink);

    // The motor is not running yet, so the idle policy has nothing to
    // linger on — the stale target keeps converging and the motor starts.
    assert_eq!(
        hw.last_write(),
        Some(set(&[Actuator::MainTrunkGate, Actuator::CollectorMotor]))
    );

    // The next idle iteration sees the motor on and schedules shutoff.
    clock.advance_secs(1);
    controller.tick(&mut hw, &clock, &mut sink);
    assert_eq!(sink.linger_count(), 1);

    clock.advance_secs(10);
    controller.tick(&mut hw, &clock, &mut sink);
    assert!(!controller.outputs().contains(Actuator::CollectorMotor));
}

// ── Quiescent controller does nothing forever ─────────────────

#[test]
fn no_requests_means_no_writes_ever() {
    let clock = SimClock::new();
    let (mut controller, mut hw, mut sink) = make_controller(&clock);

    for _ in 0..1_000 {
        controller.tick(&mut hw, &clock, &mut sink);
        clock.advance_ms(250);
    }
    assert!(hw.writes.is_empty());
    assert_eq!(controller.outputs(), ActuatorSet::ALL_OFF);
}

//! Machine request and actuator signal sets.
//!
//! The closed sets of input and output signals are named enums over a
//! compact bitmask, each variant carrying a `mask()` constant.  A
//! [`RequestSet`] holds the simultaneously asserted machine-in-use
//! signals; an [`ActuatorSet`] describes an output configuration, either
//! the physical one (`current`) or the desired one (`target`).

use core::fmt;

// ---------------------------------------------------------------------------
// Machine requests (inputs)
// ---------------------------------------------------------------------------

/// One machine-in-use signal: "this machine wants to extract dust now".
///
/// Variants are listed highest-priority first; the discriminant is the
/// signal's position on the input bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MachineRequest {
    /// Drill press or router branch gate opened.
    DrillPressOrRouter = 0b0000_0001,
    /// Table saw (top or bottom port) branch gate opened.
    TableSaw = 0b0000_0010,
    /// Planer branch gate opened.
    Planer = 0b0000_0100,
    /// Miter saw station asking for its powered gate to open.
    MiterSaw = 0b0000_1000,
}

impl MachineRequest {
    /// All requests, highest priority first.
    pub const PRIORITY_ORDER: [MachineRequest; 4] = [
        MachineRequest::DrillPressOrRouter,
        MachineRequest::TableSaw,
        MachineRequest::Planer,
        MachineRequest::MiterSaw,
    ];

    /// Return the bitmask for this request.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MachineRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DrillPressOrRouter => write!(f, "drill press/router"),
            Self::TableSaw => write!(f, "table saw"),
            Self::Planer => write!(f, "planer"),
            Self::MiterSaw => write!(f, "miter saw"),
        }
    }
}

/// Set of simultaneously asserted machine requests.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSet(u8);

impl RequestSet {
    pub const EMPTY: RequestSet = RequestSet(0);

    pub const fn contains(self, request: MachineRequest) -> bool {
        self.0 & request.mask() != 0
    }

    pub const fn with(self, request: MachineRequest) -> RequestSet {
        RequestSet(self.0 | request.mask())
    }

    pub fn insert(&mut self, request: MachineRequest) {
        self.0 |= request.mask();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The winning request under the fixed precedence, if any is asserted.
    pub fn highest_priority(self) -> Option<MachineRequest> {
        MachineRequest::PRIORITY_ORDER
            .into_iter()
            .find(|request| self.contains(*request))
    }

    /// Raw bitmask, for compact logging.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for RequestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for request in MachineRequest::PRIORITY_ORDER {
            if self.contains(request) {
                set.entry(&request);
            }
        }
        set.finish()
    }
}

// ---------------------------------------------------------------------------
// Actuators (outputs)
// ---------------------------------------------------------------------------

/// One independently switchable output: a gate relay or the collector
/// motor contactor.
///
/// The sequencer flips the lowest differing bit first, so the collector
/// motor sits on the highest bit and is always the last output switched
/// on during a power-up ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Actuator {
    /// Gate between the main trunk and the collector.
    MainTrunkGate = 0b0000_0001,
    /// Gate on the drill press / router branch trunk.
    DrillRouterTrunkGate = 0b0000_0010,
    /// Gate on the shared miter saw / planer branch trunk.
    MiterSawPlanerTrunkGate = 0b0000_0100,
    /// Powered gate at the miter saw station.
    MiterSawGate = 0b0000_1000,
    /// Collector motor contactor.
    CollectorMotor = 0b0001_0000,
}

impl Actuator {
    /// All actuators, lowest bit first (the sequencer's tie-break order).
    pub const ALL: [Actuator; 5] = [
        Actuator::MainTrunkGate,
        Actuator::DrillRouterTrunkGate,
        Actuator::MiterSawPlanerTrunkGate,
        Actuator::MiterSawGate,
        Actuator::CollectorMotor,
    ];

    /// Return the bitmask for this actuator.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Actuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainTrunkGate => write!(f, "main trunk gate"),
            Self::DrillRouterTrunkGate => write!(f, "drill/router trunk gate"),
            Self::MiterSawPlanerTrunkGate => write!(f, "miter/planer trunk gate"),
            Self::MiterSawGate => write!(f, "miter saw gate"),
            Self::CollectorMotor => write!(f, "collector motor"),
        }
    }
}

/// An output configuration: which actuators are energised.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorSet(u8);

impl ActuatorSet {
    pub const ALL_OFF: ActuatorSet = ActuatorSet(0);

    pub const fn contains(self, actuator: Actuator) -> bool {
        self.0 & actuator.mask() != 0
    }

    pub const fn with(self, actuator: Actuator) -> ActuatorSet {
        ActuatorSet(self.0 | actuator.mask())
    }

    pub const fn without(self, actuator: Actuator) -> ActuatorSet {
        ActuatorSet(self.0 & !actuator.mask())
    }

    pub fn toggle(&mut self, actuator: Actuator) {
        self.0 ^= actuator.mask();
    }

    /// Symmetric difference: the actuators whose state disagrees.
    pub const fn diff(self, other: ActuatorSet) -> ActuatorSet {
        ActuatorSet(self.0 ^ other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The lowest-significance member, if any.  This is the fixed
    /// tie-break the sequencer uses when several actuators differ.
    pub fn lowest(self) -> Option<Actuator> {
        Actuator::ALL
            .into_iter()
            .find(|actuator| self.contains(*actuator))
    }

    /// Number of energised actuators.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Raw bitmask, for compact logging.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for ActuatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for actuator in Actuator::ALL {
            if self.contains(actuator) {
                set.entry(&actuator);
            }
        }
        set.finish()
    }
}

// ---------------------------------------------------------------------------
// Raw input line levels
// ---------------------------------------------------------------------------

/// Gate-switch line levels as read at the GPIO block; `true` = line high.
///
/// The pull-up conditioning means a quiescent (unrequested) line reads
/// high; a switch grounds its line to assert the request.  Polarity
/// normalisation happens in [`crate::control::input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLevels {
    pub drill_press_or_router: bool,
    pub table_saw: bool,
    pub planer: bool,
    pub miter_saw: bool,
}

impl LineLevels {
    /// All lines high — no machine requesting.
    pub const fn quiescent() -> Self {
        Self {
            drill_press_or_router: true,
            table_saw: true,
            planer: true,
            miter_saw: true,
        }
    }

    pub const fn level(&self, request: MachineRequest) -> bool {
        match request {
            MachineRequest::DrillPressOrRouter => self.drill_press_or_router,
            MachineRequest::TableSaw => self.table_saw,
            MachineRequest::Planer => self.planer,
            MachineRequest::MiterSaw => self.miter_saw,
        }
    }

    pub fn set(&mut self, request: MachineRequest, high: bool) {
        match request {
            MachineRequest::DrillPressOrRouter => self.drill_press_or_router = high,
            MachineRequest::TableSaw => self.table_saw = high,
            MachineRequest::Planer => self.planer = high,
            MachineRequest::MiterSaw => self.miter_saw = high,
        }
    }
}

impl Default for LineLevels {
    fn default() -> Self {
        Self::quiescent()
    }
}

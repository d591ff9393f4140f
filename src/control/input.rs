//! Input sampling and polarity normalisation.
//!
//! A pure function of the present sample — no history, no debounce.  The
//! gate microswitches are trusted to be clean (passive RC conditioning on
//! the board); any filtering beyond that is a hardware concern.

use crate::signals::{LineLevels, MachineRequest, RequestSet};

/// Normalise raw active-low line levels into the set of asserted
/// requests: a LOW line means the machine wants extraction.
pub fn normalize(levels: LineLevels) -> RequestSet {
    let mut requests = RequestSet::EMPTY;
    for request in MachineRequest::PRIORITY_ORDER {
        if !levels.level(request) {
            requests.insert(request);
        }
    }
    requests
}

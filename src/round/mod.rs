//! Per-round machinery: selection, turn resolution, and the countdown clock.
//!
//! ## Key Types
//!
//! - [`Selection`]: the 0-2 face-up, unmatched positions
//! - [`Table`]: deck + selection + pending resolution
//! - [`TurnResolver`]: selection legality and pair resolution
//! - [`RoundClock`]: `Idle -> Running -> Expired | Completed`
//! - [`RoundStatus`]: `NotStarted -> Running -> Ended(cause)`

pub mod clock;
pub mod resolver;
pub mod selection;
pub mod status;

pub use clock::{ClockPhase, RoundClock, TickOutcome};
pub use resolver::{IgnoreReason, PairOutcome, PendingResolution, Resolved, Selected, Table, TurnResolver};
pub use selection::{Selection, MAX_FACE_UP};
pub use status::{EndCause, RoundStatus};

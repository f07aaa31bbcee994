//! Game session: immutable state, reducer, timers, and the controller that
//! drives them.
//!
//! ## Key Types
//!
//! - [`GameState`]: complete session state; [`GameState::reduce`] maps a
//!   [`Command`] to a [`Transition`] without mutating its input
//! - [`Scheduler`]: virtual-time queue of cancellable timers
//! - [`GameController`]: the single writer; owns a state and a scheduler
//! - [`GameEvent`]: notifications for the presentation layer
//! - [`Snapshot`]: read-only view for rendering

mod controller;
mod event;
mod scheduler;
mod snapshot;
mod state;

pub use controller::GameController;
pub use event::GameEvent;
pub use scheduler::{ScheduledTimer, Scheduler, TimerKind, TimerRequest};
pub use snapshot::{CardView, Snapshot};
pub use state::{Command, GameState, SelectionRecord, Transition};

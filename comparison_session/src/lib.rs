//! The comparison-session state machine.
//!
//! A session owns the loaded symbol catalog, the user's insertion-ordered
//! comparison selection, and the provider/surface collaborators. UI layers
//! (the CLI here, anything else elsewhere) only call the explicit command
//! handlers on [`session::ComparisonSession`] and turn its errors into
//! user-facing alerts, so the state machine stays independently testable.

pub mod errors;
pub mod session;
pub mod trace;

pub use errors::SessionError;
pub use session::{ComparisonSession, DateRange};

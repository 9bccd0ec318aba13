//! USSD menu tree
//!
//! A three-state machine with a pure transition function. The dispatcher in
//! [`crate::session`] owns all store mutation; nothing here performs I/O.

pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use state::{MenuContext, MenuState, SessionStatus, Submission, DEFAULT_ENTRY_CODE};
pub use transition::{messages, transition, TransitionResult};

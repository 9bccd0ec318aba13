//! Client-side USSD handset emulator
//!
//! Drives the gateway contract from the subscriber's side: a fresh session
//! id and the dialled code on the first step, then the fixed entry code and
//! the newly entered digits until the server answers `END`.

mod client;
mod session;
pub mod ui;

pub use client::{ClientError, HttpTransport, UssdTransport};
pub use session::{Emulator, IDLE_PROMPT, MISSING_INPUT_PROMPT};

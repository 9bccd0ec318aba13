//! USSD session simulator
//!
//! An HTTP endpoint emulating a USSD gateway's request/response contract,
//! plus a handset emulator that drives it.

pub mod api;
pub mod config;
pub mod emulator;
pub mod menu;
pub mod session;
pub mod shutdown;

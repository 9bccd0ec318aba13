//! Menu state types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service code that opens the menu tree unless configured otherwise
pub const DEFAULT_ENTRY_CODE: &str = "*123#";

/// Position of a session within the menu tree.
///
/// A session with no stored state is treated as [`MenuState::Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuState {
    #[default]
    Menu,
    Balance,
    BuyData,
}

impl MenuState {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Menu => "MENU",
            MenuState::Balance => "BALANCE",
            MenuState::BuyData => "BUY_DATA",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the gateway should keep prompting the subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[serde(rename = "CON")]
    Continue,
    #[serde(rename = "END")]
    End,
}

impl SessionStatus {
    pub fn is_end(self) -> bool {
        matches!(self, SessionStatus::End)
    }

    /// Wire code used in responses
    pub fn code(self) -> &'static str {
        match self {
            SessionStatus::Continue => "CON",
            SessionStatus::End => "END",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed parameters of the menu tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuContext {
    pub entry_code: String,
}

impl MenuContext {
    pub fn new(entry_code: impl Into<String>) -> Self {
        Self {
            entry_code: entry_code.into(),
        }
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_CODE)
    }
}

/// One subscriber submission.
///
/// `text` holds only the digits entered at this step, not the `*`-joined
/// path a carrier gateway would accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission<'a> {
    pub service_code: &'a str,
    pub text: &'a str,
}

impl<'a> Submission<'a> {
    pub fn new(service_code: &'a str, text: &'a str) -> Self {
        Self { service_code, text }
    }
}

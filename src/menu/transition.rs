//! Pure menu transition function
//!
//! Given the same state, context and submission this always produces the
//! same result. Callers apply `next` to the session store: `Some` writes the
//! state, `None` removes the session.

use super::{MenuContext, MenuState, SessionStatus, Submission};

/// Reply texts shown on the handset
pub mod messages {
    pub const WELCOME: &str = "Welcome!\n1. Check my balance\n2. Buy a data plan\n0. Back";
    pub const BALANCE: &str = "Your balance is 15.50 USD.\n0. Back";
    pub const DATA_PLANS: &str = "Data plans:\n1. 1 GB - 5 USD\n2. 5 GB - 15 USD\n0. Back";
    pub const INVALID_MENU_CHOICE: &str =
        "Invalid choice. Please try again.\n1. Check my balance\n2. Buy a data plan\n0. Back";
    pub const INVALID_PLAN_CHOICE: &str =
        "Invalid choice. Please try again.\n1. 1 GB - 5 USD\n2. 5 GB - 15 USD\n0. Back";
    pub const PURCHASE_CONFIRMED: &str =
        "Purchase successful! Your plan will be activated shortly. Thank you!\n";
    pub const UNKNOWN_SERVICE: &str = "Unknown USSD service.";
}

/// Input that returns to the root menu from any state
const BACK: &str = "0";

/// Result of a menu transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// State to store, or `None` when the session is over
    pub next: Option<MenuState>,
    pub status: SessionStatus,
    pub message: &'static str,
}

impl TransitionResult {
    fn proceed(next: MenuState, message: &'static str) -> Self {
        Self {
            next: Some(next),
            status: SessionStatus::Continue,
            message,
        }
    }

    fn end(message: &'static str) -> Self {
        Self {
            next: None,
            status: SessionStatus::End,
            message,
        }
    }

    pub fn is_end(&self) -> bool {
        self.status.is_end()
    }
}

/// Compute the reply and next state for one submission.
///
/// An unknown service code ends the session regardless of state. An empty
/// text or `"0"` resets to the root menu before any per-state handling.
pub fn transition(
    state: MenuState,
    context: &MenuContext,
    input: &Submission<'_>,
) -> TransitionResult {
    if input.service_code != context.entry_code {
        return TransitionResult::end(messages::UNKNOWN_SERVICE);
    }

    if input.text.is_empty() || input.text == BACK {
        return TransitionResult::proceed(MenuState::Menu, messages::WELCOME);
    }

    match (state, input.text) {
        (MenuState::Menu, "1") => TransitionResult::proceed(MenuState::Balance, messages::BALANCE),
        (MenuState::Menu, "2") => {
            TransitionResult::proceed(MenuState::BuyData, messages::DATA_PLANS)
        }
        (MenuState::Menu, _) => {
            TransitionResult::proceed(MenuState::Menu, messages::INVALID_MENU_CHOICE)
        }

        (MenuState::BuyData, "1" | "2") => TransitionResult::end(messages::PURCHASE_CONFIRMED),
        (MenuState::BuyData, _) => {
            TransitionResult::proceed(MenuState::BuyData, messages::INVALID_PLAN_CHOICE)
        }

        // Balance only offers "0. Back", handled above
        (MenuState::Balance, _) => {
            TransitionResult::proceed(MenuState::Balance, messages::BALANCE)
        }
    }
}

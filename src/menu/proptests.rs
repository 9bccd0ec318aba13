//! Property-based tests for the menu transition function

use super::transition::messages;
use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = MenuState> {
    prop_oneof![
        Just(MenuState::Menu),
        Just(MenuState::Balance),
        Just(MenuState::BuyData),
    ]
}

/// Keypad input, biased toward the digits the menu reacts to
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("0".to_string()),
        Just("1".to_string()),
        Just("2".to_string()),
        "[0-9*#]{1,6}",
        "\\PC{0,12}",
    ]
}

fn arb_unknown_code() -> impl Strategy<Value = String> {
    "[*#0-9a-z]{0,8}".prop_filter("must differ from entry code", |c| c != DEFAULT_ENTRY_CODE)
}

/// Replays texts from a fresh session the way the dispatcher would
fn replay(texts: &[String]) -> Option<MenuState> {
    let ctx = MenuContext::default();
    let mut stored: Option<MenuState> = None;
    for text in texts {
        let result = transition(
            stored.unwrap_or_default(),
            &ctx,
            &Submission::new(DEFAULT_ENTRY_CODE, text),
        );
        stored = result.next;
    }
    stored
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_unknown_code_always_ends(
        state in arb_state(),
        code in arb_unknown_code(),
        text in arb_text(),
    ) {
        let result = transition(state, &MenuContext::default(), &Submission::new(&code, &text));
        prop_assert_eq!(result.status, SessionStatus::End);
        prop_assert_eq!(result.message, messages::UNKNOWN_SERVICE);
        prop_assert_eq!(result.next, None);
    }

    #[test]
    fn prop_back_always_returns_to_root(state in arb_state()) {
        let result = transition(state, &MenuContext::default(), &Submission::new(DEFAULT_ENTRY_CODE, "0"));
        prop_assert_eq!(result.status, SessionStatus::Continue);
        prop_assert_eq!(result.next, Some(MenuState::Menu));
        prop_assert_eq!(result.message, messages::WELCOME);
    }

    // END and "no next state" are the same thing
    #[test]
    fn prop_end_iff_no_next_state(state in arb_state(), text in arb_text()) {
        let result = transition(state, &MenuContext::default(), &Submission::new(DEFAULT_ENTRY_CODE, &text));
        prop_assert_eq!(result.is_end(), result.next.is_none());
    }

    #[test]
    fn prop_only_plan_purchase_ends(state in arb_state(), text in arb_text()) {
        let result = transition(state, &MenuContext::default(), &Submission::new(DEFAULT_ENTRY_CODE, &text));
        let is_purchase = state == MenuState::BuyData && (text == "1" || text == "2");
        prop_assert_eq!(result.is_end(), is_purchase);
        if is_purchase {
            prop_assert_eq!(result.message, messages::PURCHASE_CONFIRMED);
        }
    }

    #[test]
    fn prop_balance_is_sticky(text in arb_text()) {
        prop_assume!(!text.is_empty() && text != "0");
        let result = transition(MenuState::Balance, &MenuContext::default(), &Submission::new(DEFAULT_ENTRY_CODE, &text));
        prop_assert_eq!(result.next, Some(MenuState::Balance));
        prop_assert_eq!(result.message, messages::BALANCE);
    }

    #[test]
    fn prop_transition_is_deterministic(state in arb_state(), text in arb_text()) {
        let ctx = MenuContext::default();
        let input = Submission::new(DEFAULT_ENTRY_CODE, &text);
        prop_assert_eq!(transition(state, &ctx, &input), transition(state, &ctx, &input));
    }

    // Any history followed by "0" lands on the root menu
    #[test]
    fn prop_back_after_any_history(texts in proptest::collection::vec(arb_text(), 0..10)) {
        let mut texts = texts;
        texts.push("0".to_string());
        prop_assert_eq!(replay(&texts), Some(MenuState::Menu));
    }
}

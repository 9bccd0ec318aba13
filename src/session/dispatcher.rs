//! Applies menu transitions against the session store

use super::{SessionStore, StoreResult};
use crate::menu::{transition, MenuContext, Submission, TransitionResult};

/// Reads the stored state, runs the pure transition, writes the outcome back.
///
/// Two requests for the same session id are not serialized against each
/// other; whichever writes last wins.
pub struct Dispatcher<S> {
    store: S,
    context: MenuContext,
}

impl<S: SessionStore> Dispatcher<S> {
    pub fn new(store: S, context: MenuContext) -> Self {
        Self { store, context }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn context(&self) -> &MenuContext {
        &self.context
    }

    /// Handle one submission for `session_id`.
    ///
    /// Only store failures are errors; every text has a defined reply.
    pub async fn dispatch(
        &self,
        session_id: &str,
        input: &Submission<'_>,
    ) -> StoreResult<TransitionResult> {
        let current = self.store.get(session_id).await?;
        let result = transition(current, &self.context, input);

        match result.next {
            Some(next) => self.store.set(session_id, next).await?,
            None => self.store.delete(session_id).await?,
        }

        tracing::debug!(
            session_id,
            service_code = input.service_code,
            from = %current,
            to = ?result.next,
            status = %result.status,
            "Menu transition"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{messages, MenuState, SessionStatus, DEFAULT_ENTRY_CODE};
    use crate::session::InMemorySessionStore;

    fn dispatcher() -> Dispatcher<InMemorySessionStore> {
        Dispatcher::new(InMemorySessionStore::new(), MenuContext::default())
    }

    async fn send(
        d: &Dispatcher<InMemorySessionStore>,
        session_id: &str,
        text: &str,
    ) -> TransitionResult {
        d.dispatch(session_id, &Submission::new(DEFAULT_ENTRY_CODE, text))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_buy_data_scenario() {
        let d = dispatcher();

        let r = send(&d, "s1", "").await;
        assert_eq!(r.message, messages::WELCOME);
        assert_eq!(r.status, SessionStatus::Continue);

        let r = send(&d, "s1", "2").await;
        assert_eq!(r.message, messages::DATA_PLANS);
        assert_eq!(d.store().load("s1").await.unwrap(), Some(MenuState::BuyData));

        let r = send(&d, "s1", "1").await;
        assert_eq!(r.message, messages::PURCHASE_CONFIRMED);
        assert_eq!(r.status, SessionStatus::End);
        assert_eq!(d.store().load("s1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ended_session_restarts_at_menu() {
        let d = dispatcher();
        send(&d, "s1", "2").await;
        send(&d, "s1", "2").await;
        assert!(d.store().is_empty().await);

        // Same id after END behaves like a fresh session
        let r = send(&d, "s1", "1").await;
        assert_eq!(r.message, messages::BALANCE);
        assert_eq!(d.store().load("s1").await.unwrap(), Some(MenuState::Balance));
    }

    #[tokio::test]
    async fn test_unknown_service_deletes_existing_session() {
        let d = dispatcher();
        send(&d, "s1", "2").await;

        let r = d
            .dispatch("s1", &Submission::new("*999#", ""))
            .await
            .unwrap();
        assert_eq!(r.status, SessionStatus::End);
        assert_eq!(r.message, messages::UNKNOWN_SERVICE);
        assert_eq!(d.store().load("s1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_service_does_not_create_session() {
        let d = dispatcher();
        d.dispatch("s1", &Submission::new("#", "1")).await.unwrap();
        assert!(d.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_back_resets_stored_state() {
        let d = dispatcher();
        send(&d, "s1", "1").await;
        assert_eq!(d.store().get("s1").await.unwrap(), MenuState::Balance);

        let r = send(&d, "s1", "0").await;
        assert_eq!(r.message, messages::WELCOME);
        assert_eq!(d.store().get("s1").await.unwrap(), MenuState::Menu);
    }

    #[tokio::test]
    async fn test_repeated_request_is_idempotent() {
        let d = dispatcher();
        send(&d, "s1", "2").await;

        let first = send(&d, "s1", "7").await;
        let second = send(&d, "s1", "7").await;
        assert_eq!(first, second);
        assert_eq!(d.store().get("s1").await.unwrap(), MenuState::BuyData);
    }

    #[tokio::test]
    async fn test_invalid_menu_choice_reaffirms_menu() {
        let d = dispatcher();
        let r = send(&d, "s1", "5").await;
        assert_eq!(r.message, messages::INVALID_MENU_CHOICE);
        assert_eq!(d.store().load("s1").await.unwrap(), Some(MenuState::Menu));
    }
}

//! HTTP API for the USSD simulator

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::menu::MenuContext;
use crate::session::{InMemorySessionStore, SessionStore, SharedDispatcher};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<SharedDispatcher>,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>, context: MenuContext) -> Self {
        Self {
            dispatcher: Arc::new(SharedDispatcher::new(store, context)),
        }
    }

    /// State backed by a fresh in-memory session table
    pub fn in_memory(context: MenuContext) -> Self {
        Self::new(Arc::new(InMemorySessionStore::new()), context)
    }
}

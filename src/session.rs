//! Session bookkeeping
//!
//! The store maps session ids to menu states; the dispatcher applies one
//! menu transition per request against it.

mod dispatcher;
pub mod store;

pub use dispatcher::Dispatcher;
pub use store::{InMemorySessionStore, SessionRecord, SessionStore, StoreError, StoreResult};

use std::sync::Arc;

/// Dispatcher over a type-erased store, as held by the HTTP layer
pub type SharedDispatcher = Dispatcher<Arc<dyn SessionStore>>;

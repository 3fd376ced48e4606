//! Shared state injected into every Actix handler.

use std::sync::Arc;

use crate::config::Config;
use crate::store::FlightStore;

/// Cloned into each worker as `web::Data<AppState>`.
///
/// Handlers are stateless apart from this: the row store is the only shared
/// mutable resource, and it lives on the other side of `store`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: FlightStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: FlightStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

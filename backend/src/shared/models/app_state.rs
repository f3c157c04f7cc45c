use std::sync::Arc;

use crate::data_access::task_store::TaskStore;

pub struct AppState {
    pub store: Box<dyn TaskStore>,
}

impl AppState {
    pub fn new(store: impl TaskStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }
}

pub type SharedState = Arc<AppState>;

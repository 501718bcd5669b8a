//! Application state shared across handlers

use crate::store::ItemStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub item_store: ItemStore,
}

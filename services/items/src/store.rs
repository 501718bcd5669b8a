//! In-memory item store
//!
//! A process-lifetime map from integer keys to items. The whole map sits
//! behind one `RwLock`; each operation holds the lock for a single map
//! access, which is all the sequencing this service needs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::ApiError;
use crate::models::Item;

/// In-memory implementation of the item store
#[derive(Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<HashMap<i64, Item>>>,
}

impl ItemStore {
    /// Creates a new empty item store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store an item under a key that is not occupied yet
    pub fn create(&self, id: i64, item: Item) -> Result<Item, ApiError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| ApiError::InternalServerError)?;

        if items.contains_key(&id) {
            return Err(ApiError::BadRequest("Item already exists".to_string()));
        }

        items.insert(id, item.clone());
        Ok(item)
    }

    /// Fetch the item stored under a key
    pub fn get(&self, id: i64) -> Result<Item, ApiError> {
        let items = self
            .items
            .read()
            .map_err(|_| ApiError::InternalServerError)?;

        items
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))
    }

    /// Replace the item stored under an occupied key
    pub fn replace(&self, id: i64, item: Item) -> Result<Item, ApiError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| ApiError::InternalServerError)?;

        if !items.contains_key(&id) {
            return Err(ApiError::NotFound("Item not found".to_string()));
        }

        items.insert(id, item.clone());
        Ok(item)
    }

    /// Remove the item stored under a key
    pub fn remove(&self, id: i64) -> Result<(), ApiError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| ApiError::InternalServerError)?;

        if items.remove(&id).is_none() {
            return Err(ApiError::NotFound("Item not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            name: "Keyboard".to_string(),
            price: 59.9,
            description: Some("Mechanical, tenkeyless".to_string()),
        }
    }

    #[test]
    fn test_create_then_get_returns_stored_item() {
        let store = ItemStore::new();

        store.create(1, sample_item()).unwrap();
        let fetched = store.get(1).unwrap();

        assert_eq!(fetched, sample_item());
    }

    #[test]
    fn test_create_at_occupied_key_is_rejected() {
        let store = ItemStore::new();

        store.create(1, sample_item()).unwrap();
        let err = store
            .create(
                1,
                Item {
                    name: "Mouse".to_string(),
                    price: 19.9,
                    description: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
        // The original item must be untouched
        assert_eq!(store.get(1).unwrap(), sample_item());
    }

    #[test]
    fn test_replace_overwrites_every_field() {
        let store = ItemStore::new();
        store.create(1, sample_item()).unwrap();

        let replacement = Item {
            name: "Mouse".to_string(),
            price: 19.9,
            description: None,
        };
        store.replace(1, replacement.clone()).unwrap();

        assert_eq!(store.get(1).unwrap(), replacement);
    }

    #[test]
    fn test_replace_missing_key_is_not_found() {
        let store = ItemStore::new();

        let err = store.replace(42, sample_item()).unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_remove_twice_is_not_found_the_second_time() {
        let store = ItemStore::new();
        store.create(1, sample_item()).unwrap();

        store.remove(1).unwrap();
        let err = store.remove(1).unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }
}

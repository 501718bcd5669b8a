//! Item model used for both request and response payloads

use serde::{Deserialize, Serialize};

/// An item stored under a client-chosen integer key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

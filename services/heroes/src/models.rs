//! Hero models for request and response payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hero entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub secret_name: String,
}

/// New hero creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewHero {
    pub name: String,
    pub age: Option<i32>,
    pub secret_name: String,
}

/// Hero merge-patch payload
///
/// Every field is optional; a field that is absent from the request body
/// leaves the stored value untouched. Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHero {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub secret_name: Option<String>,
}

impl Hero {
    /// Overwrite exactly the fields present in the update payload
    ///
    /// The id is not part of the payload and can never change here.
    pub fn apply_update(&mut self, update: &UpdateHero) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(secret_name) = &update.secret_name {
            self.secret_name = secret_name.clone();
        }
    }
}

/// Pagination query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Offset into the collection, never negative
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Page size, clamped into [1, 100]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).min(100).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hero() -> Hero {
        Hero {
            id: 1,
            name: "Deadpond".to_string(),
            age: Some(30),
            secret_name: "Dive Wilson".to_string(),
        }
    }

    #[test]
    fn test_empty_update_leaves_every_field_unchanged() {
        let mut hero = sample_hero();

        hero.apply_update(&UpdateHero::default());

        assert_eq!(hero, sample_hero());
    }

    #[test]
    fn test_update_with_only_age_changes_nothing_else() {
        let mut hero = sample_hero();

        hero.apply_update(&UpdateHero {
            age: Some(31),
            ..Default::default()
        });

        assert_eq!(hero.age, Some(31));
        assert_eq!(hero.name, "Deadpond");
        assert_eq!(hero.secret_name, "Dive Wilson");
    }

    #[test]
    fn test_update_payload_ignores_unrecognized_fields() {
        let update: UpdateHero =
            serde_json::from_str(r#"{"name": "Rusty-Man", "sidekick": "none"}"#).unwrap();

        assert_eq!(update.name.as_deref(), Some("Rusty-Man"));
        assert_eq!(update.age, None);
        assert_eq!(update.secret_name, None);
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::default();

        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 100);
    }

    #[test]
    fn test_list_query_clamps_oversized_limit() {
        let query = ListQuery {
            offset: Some(-5),
            limit: Some(1000),
        };

        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 100);
    }

    #[test]
    fn test_list_query_keeps_values_in_range() {
        let query = ListQuery {
            offset: Some(20),
            limit: Some(10),
        };

        assert_eq!(query.offset(), 20);
        assert_eq!(query.limit(), 10);
    }
}

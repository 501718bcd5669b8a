//! User models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ph_number: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New user creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ph_number: i64,
}

/// User merge-patch payload
///
/// Every field is optional; a field that is absent from the request body
/// leaves the stored value untouched. Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub ph_number: Option<i64>,
}

impl User {
    /// Overwrite exactly the fields present in the update payload
    ///
    /// Timestamps are not touched here; every mutating repository operation
    /// calls [`User::touch_updated_at`] separately before persisting.
    pub fn apply_update(&mut self, update: &UpdateUser) {
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(ph_number) = update.ph_number {
            self.ph_number = ph_number;
        }
    }

    /// Refresh `updated_at` to the current time
    pub fn touch_updated_at(&mut self) {
        self.updated_at = Utc::now();
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

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            user_id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ph_number: 1234567890,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_update_leaves_every_field_unchanged() {
        let mut user = sample_user();
        let before = user.clone();

        user.apply_update(&UpdateUser::default());

        assert_eq!(user, before);
    }

    #[test]
    fn test_update_changes_only_present_fields() {
        let mut user = sample_user();

        user.apply_update(&UpdateUser {
            email: Some("countess@example.com".to_string()),
            ..Default::default()
        });

        assert_eq!(user.email, "countess@example.com");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.ph_number, 1234567890);
    }

    #[test]
    fn test_touch_updated_at_moves_forward_and_keeps_created_at() {
        let mut user = sample_user();
        let created = user.created_at;
        let before = user.updated_at;

        user.touch_updated_at();

        assert!(user.updated_at > before);
        assert_eq!(user.created_at, created);
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn test_update_payload_ignores_unrecognized_fields() {
        let update: UpdateUser =
            serde_json::from_str(r#"{"ph_number": 9876543210, "nickname": "ada"}"#).unwrap();

        assert_eq!(update.ph_number, Some(9876543210));
        assert_eq!(update.first_name, None);
        assert_eq!(update.last_name, None);
        assert_eq!(update.email, None);
    }

    #[test]
    fn test_list_query_clamps_oversized_limit() {
        let query = ListQuery {
            offset: None,
            limit: Some(1000),
        };

        assert_eq!(query.limit(), 100);
    }
}

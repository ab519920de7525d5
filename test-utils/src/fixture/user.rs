//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user ID.
pub const DEFAULT_ID: i32 = 1;

/// Default test user login.
pub const DEFAULT_LOGIN: &str = "renter";

/// Default test user role.
pub const DEFAULT_ROLE: &str = "User";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - login: `"renter"`
/// - name: `"Test Renter"`
/// - email: `"renter@example.com"`
/// - role: `"User"`
/// - created_at: `2023-01-01T00:00:00Z`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        model: user::Model {
            id: DEFAULT_ID,
            login: DEFAULT_LOGIN.to_string(),
            name: "Test Renter".to_string(),
            email: "renter@example.com".to_string(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        },
    }
}

/// Builder for user entity models.
pub struct UserEntityBuilder {
    model: user::Model,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.model.role = role.into();
        self
    }

    pub fn build(self) -> user::Model {
        self.model
    }
}

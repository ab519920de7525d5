//! User domain models.
//!
//! Users carry exactly one role. Staff roles (`Admin`, `Manager`, `Operator`) may act on any
//! order; `User` may only act on orders they own.

use std::{fmt, str::FromStr};

use crate::server::error::{internal::InternalError, AppError};

/// Role of a user within the rental business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Operator,
    User,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Operator, Role::User];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Operator => "Operator",
            Role::User => "User",
        }
    }

    /// Whether the role belongs to rental staff rather than a customer.
    pub fn is_staff(self) -> bool {
        !matches!(self, Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// The authenticated actor of a request: who they are and what role they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: i32,
    pub role: Role,
}

impl Principal {
    pub fn new(id: i32, role: Role) -> Self {
        Self { id, role }
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub login: String,
    /// Display name of the user.
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|value| InternalError::InvalidStoredValue {
                column: "users.role",
                value,
            })?;

        Ok(Self {
            id: entity.id,
            login: entity.login,
            name: entity.name,
            email: entity.email,
            role,
        })
    }

    /// The user acting as the principal of a request.
    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.role)
    }
}

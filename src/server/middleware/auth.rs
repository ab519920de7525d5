use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permissions a request can require beyond being logged in.
pub enum Permission {
    /// Admin, Manager or Operator role.
    Staff,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every required permission.
    ///
    /// An empty `permissions` slice only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - No user ID in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let user = User::from_entity(user)?;

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !user.role.is_staff() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a staff-only action without a staff role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

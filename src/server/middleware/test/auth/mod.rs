use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    model::user::Role,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

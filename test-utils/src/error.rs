use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database, creating tables or seeding rows failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// A context accessor was used before the resource it returns was created.
    #[error("Test context resource not initialized: {0}")]
    NotInitialized(&'static str),
}

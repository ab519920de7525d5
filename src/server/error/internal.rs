use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value read from the database is not part of the closed vocabulary of its column.
    ///
    /// Indicates data written outside of this service or a missing migration. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Invalid value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Table and column the value was read from
        column: &'static str,
        /// The offending value
        value: String,
    },
}

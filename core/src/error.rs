//! Error type for the item store.
//!
//! # Design
//! Store failures stay typed all the way to the HTTP boundary instead of
//! being logged and swallowed; the boundary decides how each variant
//! answers. Absence of a row is not an error — `get` returns `Option` — so
//! the variants here are genuine execution failures.

use std::fmt;

/// Errors returned by `ItemStore` operations.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying SQLite call failed (missing table, malformed
    /// statement, constraint violation).
    Sql(rusqlite::Error),

    /// The database file or its directory could not be accessed.
    Io(std::io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::Io(err) => write!(f, "io: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_error_display_includes_source() {
        let err = StoreError::from(rusqlite::Error::ExecuteReturnedResults);
        assert!(err.to_string().starts_with("sqlite: "));
    }

    #[test]
    fn io_error_display_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert_eq!(err.to_string(), "io: denied");
    }
}

//! Translation of sqlx failures into the application taxonomy.

use foods_core::error::{AppError, ErrorKind};

/// Map a sqlx error raised while operating on `resource`.
pub fn map_sqlx_error(err: sqlx::Error, resource: &str) -> AppError {
    let (kind, message) = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            (ErrorKind::Conflict, format!("The {resource} already exists"))
        }
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Not found".to_string()),
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_) => (ErrorKind::StorageUnavailable, "Storage unavailable".to_string()),
        _ => (ErrorKind::Database, format!("Failed to access {resource} data")),
    };
    AppError::with_source(kind, message, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut, "food");
        assert_eq!(err.kind, ErrorKind::StorageUnavailable);
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn test_row_not_found() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound, "food");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_other_errors_are_database() {
        let err = map_sqlx_error(sqlx::Error::ColumnNotFound("img".to_string()), "food");
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to access food data");
    }
}

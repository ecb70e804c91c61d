// Application-level error type
// Covers failures while starting and running the server; request errors live in each domain module

use crate::config::ConfigError;

/// Main error type for the application binary
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Connecting to the database failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Running migrations failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Binding or serving the listener failed
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = ConfigError::Missing("DATABASE_URL").into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: DATABASE_URL must be set in environment"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("address in use"));
    }
}

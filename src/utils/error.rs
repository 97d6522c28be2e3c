use std::fmt;
use thiserror::Error;

/// Entity kinds managed by the reservation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hotel,
    Customer,
    Reservation,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Hotel => "Hotel",
            EntityKind::Customer => "Customer",
            EntityKind::Reservation => "Reservation",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{entity} not found: {id}")]
    NotFoundError { entity: EntityKind, id: String },

    #[error("Conflict: {message}")]
    ConflictError { message: String },

    #[error("Storage error at {path}: {source}")]
    StorageError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Storage,
    Config,
}

impl ReservationError {
    pub fn validation(message: impl Into<String>) -> Self {
        ReservationError::ValidationError {
            message: message.into(),
        }
    }

    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        ReservationError::NotFoundError {
            entity,
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ReservationError::ConflictError {
            message: message.into(),
        }
    }

    pub fn storage(path: impl Into<String>, source: std::io::Error) -> Self {
        ReservationError::StorageError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReservationError::ValidationError { .. } => ErrorCategory::Validation,
            ReservationError::NotFoundError { .. } => ErrorCategory::NotFound,
            ReservationError::ConflictError { .. } => ErrorCategory::Conflict,
            ReservationError::StorageError { .. } => ErrorCategory::Storage,
            ReservationError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// 呼叫端修正輸入後即可重試；儲存與設定錯誤需要人工處理
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::NotFound | ErrorCategory::Conflict
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the supplied fields and try again",
            ErrorCategory::NotFound => "List the collection to find a valid id",
            ErrorCategory::Conflict => {
                "Pick another room or cancel the active reservation holding it"
            }
            ErrorCategory::Storage => {
                "Make sure the data directory exists and is writable"
            }
            ErrorCategory::Config => "Fix the configuration file or command-line flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReservationError::StorageError { path, .. } => {
                format!("Could not access data file '{}'", path)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Conflict => 4,
            ErrorCategory::Storage => 5,
            ErrorCategory::Config => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = ReservationError::not_found(EntityKind::Hotel, "H404");
        assert_eq!(err.to_string(), "Hotel not found: H404");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn test_recoverable_categories() {
        assert!(ReservationError::validation("bad").is_recoverable());
        assert!(ReservationError::conflict("taken").is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReservationError::storage("hotels.json", io);
        assert!(!err.is_recoverable());
        assert_eq!(err.exit_code(), 5);
        assert!(err.user_friendly_message().contains("hotels.json"));
    }
}

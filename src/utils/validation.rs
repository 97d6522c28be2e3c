use crate::utils::error::{ReservationError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReservationError::validation(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !value.contains('@') {
        return Err(ReservationError::validation(format!(
            "{} must contain '@', got '{}'",
            field_name, value
        )));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(ReservationError::validation(format!(
            "{} must be at least {}, got {}",
            field_name, min_value, value
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReservationError::validation(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReservationError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ReservationError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Hotel Azul").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "b@example.com").is_ok());
        assert!(validate_email("email", "example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rooms", 5, 1).is_ok());
        assert!(validate_positive_number("rooms", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("room", 1u32, 1, 2).is_ok());
        assert!(validate_range("room", 2u32, 1, 2).is_ok());
        assert!(validate_range("room", 0u32, 1, 2).is_err());
        assert!(validate_range("room", 3u32, 1, 2).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.data_dir", "./data").is_ok());
        assert!(matches!(
            validate_path("storage.data_dir", ""),
            Err(ReservationError::ConfigError { .. })
        ));
        assert!(validate_path("storage.data_dir", "bad\0path").is_err());
    }
}

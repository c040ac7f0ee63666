use crate::utils::error::{FanoutError, Result};
use url::Url;

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> FanoutError {
    FanoutError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Endpoints must be absolute `http` or `https` URLs.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_range<T>(field_name: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if !(min..=max).contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com/random_joke").is_ok());
        assert!(validate_url("endpoint", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "   ").is_err());
        assert!(validate_url("endpoint", "not a url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("workers", 3usize, 1, 64).is_ok());
        assert!(validate_range("workers", 1usize, 1, 64).is_ok());
        assert!(validate_range("workers", 64usize, 1, 64).is_ok());
        assert!(validate_range("workers", 0usize, 1, 64).is_err());
        assert!(validate_range("workers", 65usize, 1, 64).is_err());
    }

    #[test]
    fn test_rejected_scheme_reports_field_and_reason() {
        match validate_url("source.endpoint", "ftp://example.com").unwrap_err() {
            FanoutError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                assert_eq!(field, "source.endpoint");
                assert_eq!(value, "ftp://example.com");
                assert_eq!(reason, "Unsupported URL scheme: ftp");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

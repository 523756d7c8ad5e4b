use url::Url;

use crate::MIN_INTERVAL_MS;
use crate::models::{NewWebsite, WebsiteUpdate};

/// Validation results with specific error messages
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { is_valid: true, error: None }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self { is_valid: false, error: Some(msg.into()) }
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| "Validation failed".to_string()))
        }
    }
}

/// Validate HTTP/HTTPS URL endpoint
pub fn validate_http_endpoint(target: &str) -> ValidationResult {
    let target = target.trim();
    if target.is_empty() {
        return ValidationResult::err("URL cannot be empty");
    }

    match Url::parse(target) {
        Ok(url) => {
            let scheme = url.scheme();
            if scheme != "http" && scheme != "https" {
                return ValidationResult::err(format!(
                    "Invalid scheme '{scheme}'. Must be http or https"
                ));
            }

            if url.host_str().is_none() {
                return ValidationResult::err("URL must have a valid host");
            }

            ValidationResult::ok()
        }
        Err(e) => {
            if !target.contains("://") {
                ValidationResult::err("URL must include scheme (http:// or https://)")
            } else {
                ValidationResult::err(format!("Invalid URL: {e}"))
            }
        }
    }
}

/// Validate website name
pub fn validate_website_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return ValidationResult::err("Name cannot be empty");
    }

    if trimmed.chars().count() > 100 {
        return ValidationResult::err("Name too long (max 100 characters)");
    }

    ValidationResult::ok()
}

/// Validate probe interval in milliseconds
pub fn validate_interval(interval_ms: u64) -> ValidationResult {
    if interval_ms < MIN_INTERVAL_MS {
        return ValidationResult::err(format!("Interval must be at least {MIN_INTERVAL_MS} ms"));
    }

    if interval_ms > 86_400_000 {
        return ValidationResult::err("Interval too long (max 24 hours)");
    }

    ValidationResult::ok()
}

/// Validate a registration request
pub fn validate_new_website(new: &NewWebsite) -> Result<(), String> {
    validate_website_name(&new.name).into_result()?;
    validate_http_endpoint(&new.url).into_result()?;
    if let Some(interval) = new.interval {
        validate_interval(interval).into_result()?;
    }
    Ok(())
}

/// Validate the fields present in a partial update
pub fn validate_update(update: &WebsiteUpdate) -> Result<(), String> {
    if let Some(name) = &update.name {
        validate_website_name(name).into_result()?;
    }
    if let Some(url) = &update.url {
        validate_http_endpoint(url).into_result()?;
    }
    if let Some(interval) = update.interval {
        validate_interval(interval).into_result()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_validation() {
        assert!(validate_http_endpoint("http://example.com").is_valid);
        assert!(validate_http_endpoint("https://example.com").is_valid);
        assert!(validate_http_endpoint("http://192.168.1.1").is_valid);
        assert!(validate_http_endpoint("http://example.com:8080/path").is_valid);

        assert!(!validate_http_endpoint("").is_valid);
        assert!(!validate_http_endpoint("example.com").is_valid);
        assert!(!validate_http_endpoint("ftp://example.com").is_valid);
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_website_name("My Website").is_valid);
        assert!(!validate_website_name("").is_valid);
        assert!(!validate_website_name("   ").is_valid);
        assert!(!validate_website_name(&"x".repeat(101)).is_valid);
    }

    #[test]
    fn test_interval_validation() {
        assert!(validate_interval(5_000).is_valid);
        assert!(!validate_interval(0).is_valid);
        assert!(!validate_interval(86_400_001).is_valid);
    }

    #[test]
    fn test_new_website_validation() {
        assert!(validate_new_website(&NewWebsite::new("Example", "https://example.com")).is_ok());

        let err = validate_new_website(&NewWebsite::new("", "https://example.com")).unwrap_err();
        assert_eq!(err, "Name cannot be empty");

        let err = validate_new_website(&NewWebsite::new("Example", "")).unwrap_err();
        assert_eq!(err, "URL cannot be empty");
    }

    #[test]
    fn test_update_validation_skips_absent_fields() {
        assert!(validate_update(&WebsiteUpdate::default()).is_ok());
        let bad = WebsiteUpdate { url: Some("not a url".into()), ..Default::default() };
        assert!(validate_update(&bad).is_err());
    }
}

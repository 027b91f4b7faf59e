use crate::utils::error::{Result, TourError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
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
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Every requested name must be one of `known`.
pub fn validate_known_names(requested: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in requested {
        if !known_set.contains(name.as_str()) {
            return Err(TourError::UnknownDemoError { name: name.clone() });
        }
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("fibonacci.cache_size", 256, 1).is_ok());
        assert!(validate_positive_number("fibonacci.cache_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("fibonacci.limit", 20u32, 0, 93).is_ok());
        assert!(validate_range("fibonacci.limit", 93u32, 0, 93).is_ok());
        assert!(validate_range("fibonacci.limit", 94u32, 0, 93).is_err());
    }

    #[test]
    fn test_validate_known_names() {
        let known = ["squares", "cubes"];
        assert!(validate_known_names(&["cubes".to_string()], &known).is_ok());
        assert!(validate_known_names(&[], &known).is_ok());

        let err = validate_known_names(&["cubes".to_string(), "sorting".to_string()], &known)
            .unwrap_err();
        assert!(matches!(err, TourError::UnknownDemoError { name } if name == "sorting"));
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("tour.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("tour.format", "yaml", &["text", "json"]).is_err());
    }
}

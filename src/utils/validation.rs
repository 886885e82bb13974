use crate::utils::error::{PatternError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(PatternError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PatternError::ConfigValidationError {
            field: field_name.to_string(),
            message: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Parses every entry, reporting the first one that fails.
pub fn parse_all<T>(values: &[String]) -> Result<Vec<T>>
where
    T: std::str::FromStr<Err = PatternError>,
{
    values.iter().map(|value| value.parse()).collect()
}

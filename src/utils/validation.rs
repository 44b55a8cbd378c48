use crate::domain::model::Version;
use crate::utils::error::{Result, UpmError};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 檢查字串是否包含除 '_' 之外的特殊字元
pub fn has_special_characters(input: &str) -> bool {
    // 匹配字母、數字、底線以外的任意字元
    let pattern = Regex::new("[^a-zA-Z0-9_]").unwrap();

    pattern.is_match(input)
}

pub fn validate_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UpmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }

    if has_special_characters(value) {
        return Err(UpmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Only letters, digits and '_' are allowed".to_string(),
        });
    }

    Ok(())
}

pub fn validate_version(field_name: &str, value: &str) -> Result<()> {
    value
        .parse::<Version>()
        .map(|_| ())
        .map_err(|e| UpmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UpmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

//! Semantic comparison and conversion of JSON/YAML documents supplied by
//! users, so formatting differences do not show up as resource drift.

use base64::Engine;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid JSON document")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML document")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn compare_json_templates(first: &str, second: &str) -> Result<bool, TemplateError> {
    let a: serde_json::Value = serde_json::from_str(first)?;
    let b: serde_json::Value = serde_json::from_str(second)?;

    let equal = a == b;
    if !equal {
        debug!(first = %a, second = %b, "canonical JSON templates differ");
    }
    Ok(equal)
}

pub fn compare_yaml_templates(first: &str, second: &str) -> Result<bool, TemplateError> {
    let a: serde_yaml::Value = serde_yaml::from_str(first)?;
    let b: serde_yaml::Value = serde_yaml::from_str(second)?;

    let equal = a == b;
    if !equal {
        debug!(first = ?a, second = ?b, "canonical YAML templates differ");
    }
    Ok(equal)
}

/// Encodes a list as a JSON array; an empty list becomes an empty string.
pub fn string_list_to_json(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    serde_json::Value::from(items.to_vec()).to_string()
}

pub fn json_to_string_list(raw: &str) -> Result<Vec<String>, TemplateError> {
    Ok(serde_json::from_str(raw)?)
}

/// Value compared against state for `user_data`: the decoded payload when the
/// input is base64 (binary payloads such as gzip'd cloud-init included), the
/// raw input bytes otherwise.
pub fn user_data_hash_sum(user_data: &str) -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .decode(user_data)
        .unwrap_or_else(|_| user_data.as_bytes().to_vec())
}

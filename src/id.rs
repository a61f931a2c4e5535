//! Identifier and request-parameter helpers shared by resource code.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

pub const CHILD_INSTANCE_TYPE_VPC: &str = "VPC";
pub const CHILD_INSTANCE_TYPE_VBR: &str = "VBR";

const CLIENT_TOKEN_MAX_LEN: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("invalid resource id `{id}`: expected {expected} part(s), got {actual}")]
    PartCount {
        id: String,
        expected: usize,
        actual: usize,
    },
    #[error("child instance id `{0}` must start with `vpc` or `vbr`")]
    UnsupportedChildInstance(String),
    #[error("invalid page number `{0}`")]
    InvalidPageNumber(String),
    #[error("cannot convert `{0}` to an integer")]
    InvalidInteger(String),
}

/// Splits a composite `a:b:c` id and checks the number of parts.
pub fn parse_resource_id(id: &str, parts: usize) -> Result<Vec<String>, IdError> {
    let split: Vec<String> = id.split(':').map(str::to_string).collect();
    if split.len() != parts {
        return Err(IdError::PartCount {
            id: id.to_string(),
            expected: parts,
            actual: split.len(),
        });
    }

    Ok(split)
}

pub fn cen_child_instance_type(id: &str) -> Result<&'static str, IdError> {
    if id.starts_with("vpc") {
        Ok(CHILD_INSTANCE_TYPE_VPC)
    } else if id.starts_with("vbr") {
        Ok(CHILD_INSTANCE_TYPE_VBR)
    } else {
        Err(IdError::UnsupportedChildInstance(id.to_string()))
    }
}

/// Idempotency token for create calls, at most 64 characters.
pub fn build_client_token(action: &str) -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let nonce = uuid::Uuid::new_v4().simple();

    let mut token = format!("TF-{action}-{secs}-{nonce}").trim().to_string();
    if token.len() > CLIENT_TOKEN_MAX_LEN {
        let mut cut = CLIENT_TOKEN_MAX_LEN;
        while !token.is_char_boundary(cut) {
            cut -= 1;
        }
        token.truncate(cut);
    }
    token
}

/// `instance_charge_type` -> `InstanceChargeType`.
pub fn terraform_to_api(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn next_page_number(current: &str) -> Result<u32, IdError> {
    current
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|page| page.checked_add(1))
        .ok_or_else(|| IdError::InvalidPageNumber(current.to_string()))
}

/// Integer request parameter to a number; a blank value is 0.
pub fn convert_integer(value: &str) -> Result<i64, IdError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    trimmed
        .parse()
        .map_err(|_| IdError::InvalidInteger(value.to_string()))
}

/// Strips surrounding spaces (not other whitespace).
pub fn trim(value: &str) -> &str {
    value.trim_matches(' ')
}

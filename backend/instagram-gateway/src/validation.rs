//! Request parameter validation.
//!
//! Runs before any upstream call is made; a rejected request never touches
//! the network.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

/// Instagram username shape: letters, digits, dots, underscores, 1-30 chars.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]{1,30}$").expect("Invalid username regex"));

pub const DEFAULT_POST_LIMIT: u32 = 25;
pub const MIN_POST_LIMIT: u32 = 1;
pub const MAX_POST_LIMIT: u32 = 100;

pub fn validate_username(raw: &str) -> Result<&str, AppError> {
    if USERNAME_REGEX.is_match(raw) {
        Ok(raw)
    } else {
        Err(AppError::Validation(format!(
            "Invalid username '{raw}': expected 1-30 letters, digits, dots or underscores"
        )))
    }
}

/// Parses the `limit` query parameter. Absent means 25; anything outside
/// [1, 100] or unparseable is rejected.
pub fn validate_limit(raw: Option<&str>) -> Result<u32, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_POST_LIMIT);
    };

    let limit: u32 = raw.parse().map_err(|_| {
        AppError::Validation(format!("Invalid limit '{raw}': expected an integer"))
    })?;

    if !(MIN_POST_LIMIT..=MAX_POST_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "Invalid limit {limit}: expected a value between {MIN_POST_LIMIT} and {MAX_POST_LIMIT}"
        )));
    }

    Ok(limit)
}

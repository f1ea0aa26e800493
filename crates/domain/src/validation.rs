// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation shared by every entity mutator.

use crate::error::DomainError;
use time::macros::format_description;
use time::{Date, Time};

/// Maximum length of short labels (types, roles, serial numbers).
pub const MAX_LABEL_LEN: usize = 50;

/// Maximum length of personal and place names.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of free-text descriptions.
pub const MAX_TEXT_LEN: usize = 255;

/// Maximum length of a phone number.
pub const MAX_PHONE_LEN: usize = 20;

/// Validates a required text field and returns it trimmed.
///
/// # Arguments
///
/// * `field` - The field name used in error messages
/// * `value` - The raw input
/// * `max` - The maximum number of characters after trimming
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or longer than `max`.
pub fn require_text(field: &'static str, value: &str, max: usize) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    let actual: usize = trimmed.chars().count();
    if actual > max {
        return Err(DomainError::FieldTooLong { field, max, actual });
    }
    Ok(trimmed.to_string())
}

/// Validates an optional text field.
///
/// Blank input is treated as absent.
///
/// # Errors
///
/// Returns an error if the trimmed value is longer than `max`.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => require_text(field, text, max).map(Some),
    }
}

/// Validates a phone number: digits plus `+`, `-`, spaces and parentheses.
///
/// # Errors
///
/// Returns an error if the value is blank, too long, contains other
/// characters or has no digits at all.
pub fn require_phone(value: &str) -> Result<String, DomainError> {
    let phone: String = require_text("phone", value, MAX_PHONE_LEN)?;
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')');
    if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidPhone(phone));
    }
    Ok(phone)
}

/// Rejects a date that lies after `today`.
///
/// # Errors
///
/// Returns `DomainError::DateInFuture` if `date > today`.
pub fn require_not_future(field: &'static str, date: Date, today: Date) -> Result<(), DomainError> {
    if date > today {
        return Err(DomainError::DateInFuture { field, date });
    }
    Ok(())
}

/// Rejects a pair of dates where `later` precedes `earlier`.
///
/// Equal dates are accepted.
///
/// # Errors
///
/// Returns `DomainError::DateOrder` if `later < earlier`.
pub fn require_ordered(
    earlier_field: &'static str,
    earlier: Date,
    later_field: &'static str,
    later: Date,
) -> Result<(), DomainError> {
    if later < earlier {
        return Err(DomainError::DateOrder {
            earlier_field,
            earlier,
            later_field,
            later,
        });
    }
    Ok(())
}

/// Rejects a negative amount of cents.
///
/// # Errors
///
/// Returns `DomainError::NegativeAmount` if `value < 0`.
pub const fn require_non_negative(field: &'static str, value: i64) -> Result<i64, DomainError> {
    if value < 0 {
        return Err(DomainError::NegativeAmount { field, value });
    }
    Ok(value)
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the string is not a valid date.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        DomainError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

/// Parses a time of day as `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the string matches neither form.
pub fn parse_time(field: &'static str, value: &str) -> Result<Time, DomainError> {
    let trimmed: &str = value.trim();
    Time::parse(trimmed, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(trimmed, format_description!("[hour]:[minute]")))
        .map_err(|_| DomainError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Formats a time of day as `HH:MM:SS`.
#[must_use]
pub fn format_time(time: Time) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

// ABOUTME: Field rule set for the intake form
// ABOUTME: Pure per-field checkers and parse helpers; no I/O, never panics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! # Field Rule Set
//!
//! One pure checker per field. A checker returns `None` when the raw value
//! passes and `Some(FieldError)` carrying the user-facing message when it
//! does not. Checkers are total: every input produces a structured result,
//! nothing is thrown.
//!
//! Validity is recomputed on every raw-value change, not only on blur, so
//! the form's aggregate "can submit" signal stays live while the user types.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use vitals_core::constants::fields::MOBILE_NUMBER_LEN;
use vitals_core::errors::FieldError;
use vitals_core::models::FieldName;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").ok());

// Zero or more digits, optional single decimal point, zero or more digits.
// Deliberately permits "" and "." at the character level; required-content
// enforcement happens at the form's aggregate gate instead.
static DECIMAL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").ok());

/// Check a full name: any non-empty string passes, without trimming.
#[must_use]
pub fn check_full_name(raw: &str) -> Option<FieldError> {
    if raw.is_empty() {
        Some(FieldError::FullNameRequired)
    } else {
        None
    }
}

/// Check a mobile number: exactly 10 characters, all decimal digits.
///
/// The length rule is checked first; a 9-digit string with a letter in it
/// reports the length error, not the digit error.
#[must_use]
pub fn check_mobile_number(raw: &str) -> Option<FieldError> {
    if raw.chars().count() != MOBILE_NUMBER_LEN {
        Some(FieldError::MobileNumberLength)
    } else if !raw.chars().all(|c| c.is_ascii_digit()) {
        Some(FieldError::MobileNumberNonDigit)
    } else {
        None
    }
}

/// Check an email: empty means "not provided" and passes; anything else
/// must match a standard local@domain.tld syntax.
#[must_use]
pub fn check_email(raw: &str) -> Option<FieldError> {
    if raw.is_empty() || EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(raw)) {
        None
    } else {
        Some(FieldError::EmailFormat)
    }
}

/// Check a date of birth: any concrete date passes, no range check.
#[must_use]
pub fn check_date_of_birth(date: Option<NaiveDate>) -> Option<FieldError> {
    if date.is_some() {
        None
    } else {
        Some(FieldError::DateOfBirthRequired)
    }
}

/// Check a height or weight input against the decimal pattern.
///
/// `field` selects which message is reported; only `Height` and `Weight`
/// are meaningful here, any other field passes unconditionally.
#[must_use]
pub fn check_measurement(field: FieldName, raw: &str) -> Option<FieldError> {
    if DECIMAL_PATTERN.as_ref().is_some_and(|re| re.is_match(raw)) {
        return None;
    }
    match field {
        FieldName::Height => Some(FieldError::HeightNotNumeric),
        FieldName::Weight => Some(FieldError::WeightNotNumeric),
        _ => None,
    }
}

/// Dispatching checker over the string-valued fields.
///
/// `DateOfBirth` is included for completeness and treats any non-empty raw
/// value as present; the form itself uses the typed
/// [`check_date_of_birth`] at the picker boundary.
#[must_use]
pub fn validate(field: FieldName, raw: &str) -> Option<FieldError> {
    match field {
        FieldName::FullName => check_full_name(raw),
        FieldName::MobileNumber => check_mobile_number(raw),
        FieldName::Email => check_email(raw),
        FieldName::DateOfBirth => {
            if raw.is_empty() {
                Some(FieldError::DateOfBirthRequired)
            } else {
                None
            }
        }
        FieldName::Height | FieldName::Weight => check_measurement(field, raw),
    }
}

/// Normalize an email raw value: empty becomes absent, a valid address is
/// kept verbatim, an invalid one yields no parsed value.
#[must_use]
pub fn parse_email(raw: &str) -> Option<String> {
    if raw.is_empty() || check_email(raw).is_some() {
        None
    } else {
        Some(raw.to_owned())
    }
}

/// Parse a measurement raw value as a decimal number.
///
/// Empty strings and a bare "." carry no numeric value and yield `None`.
/// Non-finite spellings ("inf", "NaN") are rejected; the decimal pattern
/// never admits them.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

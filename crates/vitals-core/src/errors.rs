// ABOUTME: Error types for field validation and form submission
// ABOUTME: FieldError carries user-facing messages; SubmitError rejects invalid submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! # Error Types
//!
//! All failure in the intake engine is expressed as data rather than thrown
//! control flow:
//!
//! - [`FieldError`] - per-field validation failure, stored on the field's
//!   state and displayed next to the input; never fatal
//! - [`SubmitError`] - returned by the form's submit operation when the
//!   aggregate validity gate refuses to produce a snapshot
//!
//! A skipped unit conversion (blank or non-numeric source) is not an error
//! at all; the conversion helpers return `None` and the derived field is
//! cleared.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-field validation failure with a user-facing message.
///
/// The `Display` implementation yields the exact message shown next to the
/// offending input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Full name was left empty
    #[error("Full name is required")]
    FullNameRequired,
    /// Mobile number is not exactly 10 characters long
    #[error("Mobile number must be exactly 10 digits")]
    MobileNumberLength,
    /// Mobile number contains a non-digit character
    #[error("Mobile number should only contain digits")]
    MobileNumberNonDigit,
    /// Email is present but not syntactically valid
    #[error("Invalid email format")]
    EmailFormat,
    /// No date of birth has been picked
    #[error("Date of birth is required")]
    DateOfBirthRequired,
    /// Height input is not a plain decimal string
    #[error("Height should be numeric")]
    HeightNotNumeric,
    /// Weight input is not a plain decimal string
    #[error("Weight should be numeric")]
    WeightNotNumeric,
}

impl FieldError {
    /// The user-facing message for this error.
    ///
    /// Convenience accessor for presentation layers that want a `String`
    /// without going through `Display` formatting machinery.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Submission-level failure returned by the form's submit operation.
///
/// There is no separate submission-level message for the user; the per-field
/// errors already on the form remain the visible explanation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The aggregate validity gate is closed; no snapshot was produced and
    /// any previously accepted snapshot is left untouched.
    #[error("form is not valid for submission")]
    FormInvalid,
}

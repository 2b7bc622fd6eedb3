// ABOUTME: Field identity enums and per-field state tracking
// ABOUTME: FieldName (logical fields), InputField (physical inputs), and FieldState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

use serde::{Deserialize, Serialize};

use crate::errors::FieldError;

/// Logical fields of the intake record.
///
/// Height and weight are single logical fields even when the active unit
/// system splits them across multiple input widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// The person's full name
    FullName,
    /// 10-digit mobile number
    MobileNumber,
    /// Optional email address
    Email,
    /// Date of birth from the picker
    DateOfBirth,
    /// Height in the active unit system
    Height,
    /// Weight in the active unit system
    Weight,
}

impl FieldName {
    /// Stable identifier used in logs and error listings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::MobileNumber => "mobile_number",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }
}

/// Physical text inputs routed through the form's edit operation.
///
/// Each measurement representation has its own input; the date of birth is
/// not listed here because it arrives from the picker as a typed date, not
/// as a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Full name input
    FullName,
    /// Mobile number input
    MobileNumber,
    /// Email input
    Email,
    /// Height, centimeters input
    HeightCm,
    /// Height, feet input
    HeightFeet,
    /// Height, inches input
    HeightInches,
    /// Weight, kilograms input
    WeightKg,
    /// Weight, pounds input
    WeightLbs,
}

impl InputField {
    /// The logical field this input belongs to
    #[must_use]
    pub const fn field_name(&self) -> FieldName {
        match self {
            Self::FullName => FieldName::FullName,
            Self::MobileNumber => FieldName::MobileNumber,
            Self::Email => FieldName::Email,
            Self::HeightCm | Self::HeightFeet | Self::HeightInches => FieldName::Height,
            Self::WeightKg | Self::WeightLbs => FieldName::Weight,
        }
    }

    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::MobileNumber => "mobile_number",
            Self::Email => "email",
            Self::HeightCm => "height_cm",
            Self::HeightFeet => "height_feet",
            Self::HeightInches => "height_inches",
            Self::WeightKg => "weight_kg",
            Self::WeightLbs => "weight_lbs",
        }
    }
}

/// Live state of a single field while the form is being edited.
///
/// `raw` is exactly what the user typed; `parsed` is the normalized value
/// when one could be extracted (independent of validity, so an optional
/// field can be valid with no parsed value). Validity is recomputed on
/// every raw-value change so the form's aggregate signal stays live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldState<T> {
    /// Raw string exactly as typed into the input widget
    pub raw: String,
    /// Normalized value extracted from `raw`, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<T>,
    /// Whether the user has edited this field at least once
    pub touched: bool,
    /// Current validation failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

impl<T> FieldState<T> {
    /// Whether the field currently passes its validation rule
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the field has any content at all
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.raw.is_empty()
    }
}

impl<T> Default for FieldState<T> {
    fn default() -> Self {
        Self {
            raw: String::new(),
            parsed: None,
            touched: false,
            error: None,
        }
    }
}

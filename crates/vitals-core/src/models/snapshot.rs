// ABOUTME: Measurement readings, the intake record, and submission snapshots
// ABOUTME: HeightReading, WeightReading, MeasurementRecord, and FormSnapshot definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::units::{HeightUnit, WeightUnit};

/// Height captured in both unit systems simultaneously.
///
/// Values are the display strings from the form; one side was typed by the
/// user, the other was derived from it. Blank strings mean the derived side
/// could not be computed (source empty or non-numeric).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeightReading {
    /// Centimeters representation
    pub cm: String,
    /// Feet component of the imperial representation
    pub feet: String,
    /// Inches component of the imperial representation
    pub inches: String,
}

/// Weight captured in both unit systems simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeightReading {
    /// Kilograms representation
    pub kg: String,
    /// Pounds representation
    pub lbs: String,
}

/// The form's target shape: identity plus body measurements.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use vitals_core::models::{HeightReading, MeasurementRecord, WeightReading};
///
/// let record = MeasurementRecord {
///     full_name: "Asha Rao".into(),
///     mobile_number: "9876543210".into(),
///     email: None,
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
///     height: HeightReading { cm: "170".into(), feet: "5".into(), inches: "7".into() },
///     weight: WeightReading { kg: "65".into(), lbs: "143.3".into() },
/// };
/// assert!(record.email.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// The person's full name, non-empty
    pub full_name: String,
    /// Exactly 10 decimal digits
    pub mobile_number: String,
    /// Optional email address; `None` means not provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth, unbounded
    pub date_of_birth: NaiveDate,
    /// Height in both unit systems
    pub height: HeightReading,
    /// Weight in both unit systems
    pub weight: WeightReading,
}

/// Immutable copy of the form taken at a successful submit.
///
/// Contains exactly the record fields plus both unit selections. A snapshot
/// is created once per accepted submission, never mutated afterward, and
/// superseded (not merged) by the next accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// All nine field values frozen at submit time
    pub record: MeasurementRecord,
    /// Unit system selected for height at submit time
    pub height_unit: HeightUnit,
    /// Unit system selected for weight at submit time
    pub weight_unit: WeightUnit,
}

impl FormSnapshot {
    /// Serialize the snapshot to a JSON string.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a snapshot from a JSON string.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the JSON is malformed or missing fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

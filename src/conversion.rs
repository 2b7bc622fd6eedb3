// ABOUTME: Unit conversion engine for dual-unit height and weight fields
// ABOUTME: Pure numeric conversions plus string-level derivation with skip semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! # Unit Conversion Engine
//!
//! Keeps the two representations of height and weight numerically consistent
//! under editing from either side. Canonical forms are centimeters and
//! kilograms; rounding is deterministic:
//!
//! - cm -> ft/in: inches are rounded to the nearest whole inch, and a
//!   remainder that rounds to 12 carries into the feet component
//! - ft/in -> cm: rounded to the nearest whole centimeter
//! - kg <-> lbs: rounded to one decimal place in both directions
//!
//! The string-level `derive_*` helpers implement the skip rule: a source
//! that is blank or carries no numeric value yields `None`, and the caller
//! clears the derived field rather than showing a stale or defaulted number.
//! Conversion never fails; there is no error path here at all.

use vitals_core::constants::units::{CM_PER_INCH, INCHES_PER_FOOT, LBS_PER_KG, WEIGHT_DECIMAL_SCALE};

use crate::validation::parse_decimal;

/// Whole-unit imperial height produced from a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeetInches {
    /// Feet component
    pub feet: u32,
    /// Inches component, always in 0..=11 after carry normalization
    pub inches: u32,
}

/// Convert centimeters to feet and whole inches.
///
/// An inch remainder that rounds up to 12 carries into the feet component,
/// so `inches` is always strictly below 12.
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total_inches = cm / CM_PER_INCH;
    let mut feet = (total_inches / INCHES_PER_FOOT).floor();
    let mut inches = (total_inches % INCHES_PER_FOOT).round();
    if inches >= INCHES_PER_FOOT {
        feet += 1.0;
        inches = 0.0;
    }
    FeetInches {
        feet: feet as u32,
        inches: inches as u32,
    }
}

/// Convert feet and inches to whole centimeters.
#[must_use]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    (feet.mul_add(INCHES_PER_FOOT, inches) * CM_PER_INCH).round()
}

/// Convert kilograms to pounds, rounded to one decimal place.
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    (kg * LBS_PER_KG * WEIGHT_DECIMAL_SCALE).round() / WEIGHT_DECIMAL_SCALE
}

/// Convert pounds to kilograms, rounded to one decimal place.
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    (lbs / LBS_PER_KG * WEIGHT_DECIMAL_SCALE).round() / WEIGHT_DECIMAL_SCALE
}

/// Derive the imperial display strings from a raw centimeters value.
///
/// Returns `(feet, inches)` as display strings, or `None` when the source
/// is blank or carries no numeric value.
#[must_use]
pub fn derive_imperial_height(cm_raw: &str) -> Option<(String, String)> {
    let cm = parse_decimal(cm_raw)?;
    let imperial = cm_to_feet_inches(cm);
    Some((imperial.feet.to_string(), imperial.inches.to_string()))
}

/// Derive the metric display string from raw feet and inches values.
///
/// When both components are blank no conversion runs. When at least one is
/// present, a missing or non-numeric component participates as zero; this
/// is arithmetic fallback, never a parse failure.
#[must_use]
pub fn derive_metric_height(feet_raw: &str, inches_raw: &str) -> Option<String> {
    if feet_raw.is_empty() && inches_raw.is_empty() {
        return None;
    }
    let feet = parse_decimal(feet_raw).unwrap_or(0.0);
    let inches = parse_decimal(inches_raw).unwrap_or(0.0);
    let cm = feet_inches_to_cm(feet, inches);
    Some((cm as i64).to_string())
}

/// Derive the pounds display string from a raw kilograms value.
#[must_use]
pub fn derive_lbs(kg_raw: &str) -> Option<String> {
    let kg = parse_decimal(kg_raw)?;
    Some(kg_to_lbs(kg).to_string())
}

/// Derive the kilograms display string from a raw pounds value.
#[must_use]
pub fn derive_kg(lbs_raw: &str) -> Option<String> {
    let lbs = parse_decimal(lbs_raw)?;
    Some(lbs_to_kg(lbs).to_string())
}

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Conversion factors and field limits for the Vitals intake engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Unit conversion constants for length and mass
pub mod units {
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;

    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;

    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.204_62;

    /// Scale factor for rounding derived weights to one decimal place
    pub const WEIGHT_DECIMAL_SCALE: f64 = 10.0;
}

/// Field-level limits and lengths
pub mod fields {
    /// Required length of a mobile number, in digits
    pub const MOBILE_NUMBER_LEN: usize = 10;
}

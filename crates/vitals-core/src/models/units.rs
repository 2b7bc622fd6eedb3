// ABOUTME: Unit-system selectors for the dual-unit height and weight fields
// ABOUTME: HeightUnit and WeightUnit enums with string mapping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

use serde::{Deserialize, Serialize};

/// Unit system currently selected for the height field.
///
/// Exactly one system is authoritative for editing at any instant; the
/// other representation is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Metric centimeters (single input)
    #[default]
    Cm,
    /// Imperial feet and inches (two inputs)
    Ft,
}

impl HeightUnit {
    /// Selection string as used by unit toggle widgets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Ft => "ft",
        }
    }

    /// Parse from a selection string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cm" => Some(Self::Cm),
            "ft" => Some(Self::Ft),
            _ => None,
        }
    }
}

/// Unit system currently selected for the weight field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Metric kilograms
    #[default]
    Kg,
    /// Imperial pounds
    Lbs,
}

impl WeightUnit {
    /// Selection string as used by unit toggle widgets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }

    /// Parse from a selection string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kg" => Some(Self::Kg),
            "lbs" => Some(Self::Lbs),
            _ => None,
        }
    }
}

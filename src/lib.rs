// ABOUTME: Main library entry point for the Vitals measurement intake engine
// ABOUTME: Field validation, dual-unit conversion, form state machine, and presenter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

#![deny(unsafe_code)]

//! # Vitals Intake
//!
//! A measurement conversion and validation engine for guided intake forms
//! that capture a person's identity and body measurements. The engine
//! validates each field on every keystroke, keeps metric and imperial
//! representations of height and weight reconciled as either side is
//! edited, and gates submission behind a single aggregate validity signal.
//!
//! ## Architecture
//!
//! - **validation**: pure per-field rules; structured results, no exceptions
//! - **conversion**: deterministic dual-unit derivation with skip semantics
//! - **form**: the state machine owning all field and unit state
//! - **presenter**: read-only rendering of accepted submissions
//!
//! Input widgets and picker chrome are external collaborators: they route
//! raw values through [`form::IntakeForm::set_field`] and friends, read the
//! validity signal back, and hand accepted snapshots to a
//! [`presenter::SnapshotPresenter`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vitals_intake::form::IntakeForm;
//! use vitals_intake::models::InputField;
//!
//! let mut form = IntakeForm::new();
//! form.set_field(InputField::FullName, "Asha Rao");
//! form.set_field(InputField::MobileNumber, "9876543210");
//! form.set_date_of_birth(NaiveDate::from_ymd_opt(1990, 5, 1));
//! form.set_field(InputField::HeightCm, "170");
//! form.set_field(InputField::WeightKg, "65");
//!
//! assert!(form.is_valid());
//! let snapshot = form.submit().unwrap();
//! assert_eq!(snapshot.record.height.feet, "5");
//! assert_eq!(snapshot.record.height.inches, "7");
//! assert_eq!(snapshot.record.weight.lbs, "143.3");
//! ```

/// Unit conversion engine for dual-unit height and weight fields
pub mod conversion;

/// Form state machine owning field state and unit selections
pub mod form;

/// Snapshot presenter contract and plain-text implementation
pub mod presenter;

/// Field rule set: pure per-field validation
pub mod validation;

/// Core error types, re-exported from `vitals-core`
pub mod errors {
    pub use vitals_core::errors::{FieldError, SubmitError};
}

/// Core data models, re-exported from `vitals-core`
pub mod models {
    pub use vitals_core::models::{
        FieldName, FieldState, FormSnapshot, HeightReading, HeightUnit, InputField,
        MeasurementRecord, WeightReading, WeightUnit,
    };
}

/// Constants (conversion factors, field limits), re-exported from `vitals-core`
pub mod constants {
    pub use vitals_core::constants::{fields, units};
}

// ABOUTME: Core data models for the Vitals intake engine
// ABOUTME: Field state, unit selectors, measurement readings, and submission snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! # Data Models
//!
//! Core data structures shared across the intake engine.
//!
//! ## Design Principles
//!
//! - **Serializable**: all models support JSON serialization so collaborators
//!   can persist or transmit snapshots without touching live form state
//! - **Type Safe**: unit selections and field identities are enums, never
//!   bare strings
//! - **Immutable at the boundary**: snapshots are plain owned data with no
//!   reference back into the form that produced them

/// Field identity and per-field state tracking
pub mod field;

/// Measurement readings, the intake record, and submission snapshots
pub mod snapshot;

/// Unit-system selectors for height and weight
pub mod units;

pub use field::{FieldName, FieldState, InputField};
pub use snapshot::{FormSnapshot, HeightReading, MeasurementRecord, WeightReading};
pub use units::{HeightUnit, WeightUnit};

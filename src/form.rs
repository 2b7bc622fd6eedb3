// ABOUTME: Form state machine owning all field state and unit selections
// ABOUTME: Validates on every edit, reconciles dual-unit fields, and freezes submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! # Form State Machine
//!
//! [`IntakeForm`] is the sole owner and sole mutator of all field state and
//! of the two unit selections. Every edit runs the same synchronous
//! sequence: validate the raw value, refresh the paired unit representation
//! when the edited field belongs to the selected system, recompute the
//! aggregate validity signal. The machine has no background work and no
//! state beyond editing; a successful submit freezes the current values
//! into an independent [`FormSnapshot`] and editing simply continues.
//!
//! Derived writes go straight to field state and never re-enter the edit
//! path, so a derivation cannot trigger another derivation.

use chrono::NaiveDate;
use tracing::{debug, info, trace, warn};

use vitals_core::constants::fields::MOBILE_NUMBER_LEN;
use vitals_core::errors::{FieldError, SubmitError};
use vitals_core::models::{
    FieldName, FieldState, FormSnapshot, HeightReading, HeightUnit, InputField, MeasurementRecord,
    WeightReading, WeightUnit,
};

use crate::{conversion, validation};

/// Live intake form: per-field raw values, derived validity, unit
/// selections, and the most recently accepted snapshot.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    full_name: FieldState<String>,
    mobile_number: FieldState<String>,
    email: FieldState<String>,
    date_of_birth: FieldState<NaiveDate>,
    height_cm: FieldState<f64>,
    height_feet: FieldState<f64>,
    height_inches: FieldState<f64>,
    weight_kg: FieldState<f64>,
    weight_lbs: FieldState<f64>,
    height_unit: HeightUnit,
    weight_unit: WeightUnit,
    last_snapshot: Option<FormSnapshot>,
}

impl IntakeForm {
    /// Create an empty form with metric units selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit to one of the text inputs.
    ///
    /// Runs the field's rule, stores the raw value with its validity, and
    /// for a measurement input belonging to the currently selected unit
    /// system, refreshes the paired representation. The whole sequence is
    /// synchronous; there is nothing to await and no reentrancy.
    pub fn set_field(&mut self, input: InputField, raw: &str) {
        match input {
            InputField::FullName => {
                let error = validation::check_full_name(raw);
                self.full_name = FieldState {
                    raw: raw.to_owned(),
                    parsed: error.is_none().then(|| raw.to_owned()),
                    touched: true,
                    error,
                };
            }
            InputField::MobileNumber => {
                let error = validation::check_mobile_number(raw);
                self.mobile_number = FieldState {
                    raw: raw.to_owned(),
                    parsed: error.is_none().then(|| raw.to_owned()),
                    touched: true,
                    error,
                };
            }
            InputField::Email => {
                self.email = FieldState {
                    raw: raw.to_owned(),
                    parsed: validation::parse_email(raw),
                    touched: true,
                    error: validation::check_email(raw),
                };
            }
            InputField::HeightCm => {
                Self::store_measurement(&mut self.height_cm, FieldName::Height, raw);
            }
            InputField::HeightFeet => {
                Self::store_measurement(&mut self.height_feet, FieldName::Height, raw);
            }
            InputField::HeightInches => {
                Self::store_measurement(&mut self.height_inches, FieldName::Height, raw);
            }
            InputField::WeightKg => {
                Self::store_measurement(&mut self.weight_kg, FieldName::Weight, raw);
            }
            InputField::WeightLbs => {
                Self::store_measurement(&mut self.weight_lbs, FieldName::Weight, raw);
            }
        }

        self.refresh_derived(input);
        debug!(
            field = input.as_str(),
            valid = self.is_valid(),
            "field edited"
        );
    }

    /// Record the picker's date selection; `None` clears the field.
    pub fn set_date_of_birth(&mut self, date: Option<NaiveDate>) {
        self.date_of_birth = FieldState {
            raw: date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default(),
            parsed: date,
            touched: true,
            error: validation::check_date_of_birth(date),
        };
        debug!(valid = self.is_valid(), "date of birth set");
    }

    /// Switch which height representation is authoritative for editing.
    ///
    /// Switching alone never alters the newly active side; the other side
    /// is re-derived only when the active side has content.
    pub fn set_height_unit(&mut self, unit: HeightUnit) {
        if self.height_unit == unit {
            return;
        }
        self.height_unit = unit;
        debug!(unit = unit.as_str(), "height unit switched");
        match unit {
            HeightUnit::Cm if self.height_cm.has_content() => self.refresh_imperial_height(),
            HeightUnit::Ft
                if self.height_feet.has_content() || self.height_inches.has_content() =>
            {
                self.refresh_metric_height();
            }
            _ => {}
        }
    }

    /// Switch which weight representation is authoritative for editing.
    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        if self.weight_unit == unit {
            return;
        }
        self.weight_unit = unit;
        debug!(unit = unit.as_str(), "weight unit switched");
        match unit {
            WeightUnit::Kg if self.weight_kg.has_content() => self.refresh_lbs(),
            WeightUnit::Lbs if self.weight_lbs.has_content() => self.refresh_kg(),
            _ => {}
        }
    }

    /// Aggregate validity: every required field passes its rule and has
    /// content. Height and weight are gated on the ACTIVE representation;
    /// the pattern rule alone would accept an empty string, so emptiness is
    /// checked here in addition. Email may be empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let no_field_errors = self.full_name.is_valid()
            && self.mobile_number.is_valid()
            && self.email.is_valid()
            && self.date_of_birth.is_valid()
            && self.height_cm.is_valid()
            && self.height_feet.is_valid()
            && self.height_inches.is_valid()
            && self.weight_kg.is_valid()
            && self.weight_lbs.is_valid();
        let height_present = match self.height_unit {
            HeightUnit::Cm => self.height_cm.has_content(),
            HeightUnit::Ft => self.height_feet.has_content() || self.height_inches.has_content(),
        };
        let weight_present = match self.weight_unit {
            WeightUnit::Kg => self.weight_kg.has_content(),
            WeightUnit::Lbs => self.weight_lbs.has_content(),
        };
        no_field_errors
            && self.full_name.parsed.is_some()
            && self.mobile_number.parsed.is_some()
            && self.date_of_birth.parsed.is_some()
            && height_present
            && weight_present
    }

    /// Freeze the current values into an immutable snapshot.
    ///
    /// The snapshot supersedes any previously accepted one and is also
    /// returned to the caller for handing to a presenter. The form stays
    /// editable afterwards; each further accepted submit produces a new
    /// independent snapshot.
    ///
    /// # Errors
    /// Returns [`SubmitError::FormInvalid`] when the aggregate gate is
    /// closed. No snapshot is produced and the previously accepted one, if
    /// any, is left untouched; the per-field errors already on the form
    /// remain the user-visible explanation.
    pub fn submit(&mut self) -> Result<FormSnapshot, SubmitError> {
        if !self.is_valid() {
            warn!(errors = self.field_errors().len(), "submission rejected");
            return Err(SubmitError::FormInvalid);
        }
        let Some(date_of_birth) = self.date_of_birth.parsed else {
            return Err(SubmitError::FormInvalid);
        };
        let record = MeasurementRecord {
            full_name: self.full_name.raw.clone(),
            mobile_number: self.mobile_number.raw.clone(),
            email: self.email.parsed.clone(),
            date_of_birth,
            height: HeightReading {
                cm: self.height_cm.raw.clone(),
                feet: self.height_feet.raw.clone(),
                inches: self.height_inches.raw.clone(),
            },
            weight: WeightReading {
                kg: self.weight_kg.raw.clone(),
                lbs: self.weight_lbs.raw.clone(),
            },
        };
        let snapshot = FormSnapshot {
            record,
            height_unit: self.height_unit,
            weight_unit: self.weight_unit,
        };
        info!(
            height_unit = self.height_unit.as_str(),
            weight_unit = self.weight_unit.as_str(),
            "submission accepted"
        );
        self.last_snapshot = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Raw display string currently held by an input.
    #[must_use]
    pub fn raw_value(&self, input: InputField) -> &str {
        match input {
            InputField::FullName => &self.full_name.raw,
            InputField::MobileNumber => &self.mobile_number.raw,
            InputField::Email => &self.email.raw,
            InputField::HeightCm => &self.height_cm.raw,
            InputField::HeightFeet => &self.height_feet.raw,
            InputField::HeightInches => &self.height_inches.raw,
            InputField::WeightKg => &self.weight_kg.raw,
            InputField::WeightLbs => &self.weight_lbs.raw,
        }
    }

    /// Current validation failure of an input, if any.
    #[must_use]
    pub fn field_error(&self, input: InputField) -> Option<FieldError> {
        match input {
            InputField::FullName => self.full_name.error,
            InputField::MobileNumber => self.mobile_number.error,
            InputField::Email => self.email.error,
            InputField::HeightCm => self.height_cm.error,
            InputField::HeightFeet => self.height_feet.error,
            InputField::HeightInches => self.height_inches.error,
            InputField::WeightKg => self.weight_kg.error,
            InputField::WeightLbs => self.weight_lbs.error,
        }
    }

    /// Whether the user has edited an input at least once.
    #[must_use]
    pub fn is_touched(&self, input: InputField) -> bool {
        match input {
            InputField::FullName => self.full_name.touched,
            InputField::MobileNumber => self.mobile_number.touched,
            InputField::Email => self.email.touched,
            InputField::HeightCm => self.height_cm.touched,
            InputField::HeightFeet => self.height_feet.touched,
            InputField::HeightInches => self.height_inches.touched,
            InputField::WeightKg => self.weight_kg.touched,
            InputField::WeightLbs => self.weight_lbs.touched,
        }
    }

    /// The picked date of birth, if any.
    #[must_use]
    pub const fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth.parsed
    }

    /// Unit system currently selected for height.
    #[must_use]
    pub const fn height_unit(&self) -> HeightUnit {
        self.height_unit
    }

    /// Unit system currently selected for weight.
    #[must_use]
    pub const fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    /// The most recently accepted snapshot, if any submission succeeded.
    #[must_use]
    pub const fn last_snapshot(&self) -> Option<&FormSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// How many digits the mobile number still needs, for the input's
    /// "characters left" hint.
    #[must_use]
    pub fn remaining_mobile_digits(&self) -> usize {
        MOBILE_NUMBER_LEN.saturating_sub(self.mobile_number.raw.chars().count())
    }

    /// All current per-field errors, one per logical field, for display in
    /// a summary sheet. Height and weight report the active side's error.
    #[must_use]
    pub fn field_errors(&self) -> Vec<(FieldName, FieldError)> {
        let slots = [
            (FieldName::FullName, self.full_name.error),
            (FieldName::MobileNumber, self.mobile_number.error),
            (FieldName::Email, self.email.error),
            (FieldName::DateOfBirth, self.date_of_birth.error),
            (FieldName::Height, self.height_error()),
            (FieldName::Weight, self.weight_error()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, error)| error.map(|e| (name, e)))
            .collect()
    }

    fn height_error(&self) -> Option<FieldError> {
        match self.height_unit {
            HeightUnit::Cm => self.height_cm.error,
            HeightUnit::Ft => self.height_feet.error.or(self.height_inches.error),
        }
    }

    fn weight_error(&self) -> Option<FieldError> {
        match self.weight_unit {
            WeightUnit::Kg => self.weight_kg.error,
            WeightUnit::Lbs => self.weight_lbs.error,
        }
    }

    fn store_measurement(state: &mut FieldState<f64>, field: FieldName, raw: &str) {
        *state = FieldState {
            raw: raw.to_owned(),
            parsed: validation::parse_decimal(raw),
            touched: true,
            error: validation::check_measurement(field, raw),
        };
    }

    // Derived writes bypass set_field; only user edits enter the
    // validate-then-derive path.
    fn store_derived(state: &mut FieldState<f64>, field: FieldName, raw: String) {
        state.parsed = validation::parse_decimal(&raw);
        state.error = validation::check_measurement(field, &raw);
        state.raw = raw;
    }

    fn clear_derived(state: &mut FieldState<f64>) {
        state.raw.clear();
        state.parsed = None;
        state.error = None;
    }

    fn refresh_derived(&mut self, input: InputField) {
        match input {
            InputField::HeightCm if self.height_unit == HeightUnit::Cm => {
                self.refresh_imperial_height();
            }
            InputField::HeightFeet | InputField::HeightInches
                if self.height_unit == HeightUnit::Ft =>
            {
                self.refresh_metric_height();
            }
            InputField::WeightKg if self.weight_unit == WeightUnit::Kg => self.refresh_lbs(),
            InputField::WeightLbs if self.weight_unit == WeightUnit::Lbs => self.refresh_kg(),
            _ => {}
        }
    }

    fn refresh_imperial_height(&mut self) {
        if let Some((feet, inches)) = conversion::derive_imperial_height(&self.height_cm.raw) {
            trace!(%feet, %inches, "derived imperial height");
            Self::store_derived(&mut self.height_feet, FieldName::Height, feet);
            Self::store_derived(&mut self.height_inches, FieldName::Height, inches);
        } else {
            Self::clear_derived(&mut self.height_feet);
            Self::clear_derived(&mut self.height_inches);
        }
    }

    fn refresh_metric_height(&mut self) {
        if let Some(cm) =
            conversion::derive_metric_height(&self.height_feet.raw, &self.height_inches.raw)
        {
            trace!(%cm, "derived metric height");
            Self::store_derived(&mut self.height_cm, FieldName::Height, cm);
        } else {
            Self::clear_derived(&mut self.height_cm);
        }
    }

    fn refresh_lbs(&mut self) {
        if let Some(lbs) = conversion::derive_lbs(&self.weight_kg.raw) {
            trace!(%lbs, "derived pounds");
            Self::store_derived(&mut self.weight_lbs, FieldName::Weight, lbs);
        } else {
            Self::clear_derived(&mut self.weight_lbs);
        }
    }

    fn refresh_kg(&mut self) {
        if let Some(kg) = conversion::derive_kg(&self.weight_lbs.raw) {
            trace!(%kg, "derived kilograms");
            Self::store_derived(&mut self.weight_kg, FieldName::Weight, kg);
        } else {
            Self::clear_derived(&mut self.weight_kg);
        }
    }
}

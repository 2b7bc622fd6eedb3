// ABOUTME: Integration tests for the submission flow end to end
// ABOUTME: Snapshot freezing, rejection semantics, JSON round-trip, and presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use vitals_intake::errors::SubmitError;
use vitals_intake::form::IntakeForm;
use vitals_intake::models::{FormSnapshot, HeightUnit, InputField, WeightUnit};
use vitals_intake::presenter::{SnapshotPresenter, SummaryPresenter};

fn filled_form() -> IntakeForm {
    let mut form = IntakeForm::new();
    form.set_field(InputField::FullName, "Asha Rao");
    form.set_field(InputField::MobileNumber, "9876543210");
    form.set_field(InputField::Email, "");
    form.set_date_of_birth(NaiveDate::from_ymd_opt(1990, 5, 1));
    form.set_field(InputField::HeightCm, "170");
    form.set_field(InputField::WeightKg, "65");
    form
}

#[test]
fn test_accepted_submission_freezes_all_nine_values_and_unit_tags() {
    let mut form = filled_form();
    let snapshot = form.submit().unwrap();

    assert_eq!(snapshot.record.full_name, "Asha Rao");
    assert_eq!(snapshot.record.mobile_number, "9876543210");
    assert_eq!(snapshot.record.email, None);
    assert_eq!(
        snapshot.record.date_of_birth,
        NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()
    );
    assert_eq!(snapshot.record.height.cm, "170");
    assert_eq!(snapshot.record.height.feet, "5");
    assert_eq!(snapshot.record.height.inches, "7");
    assert_eq!(snapshot.record.weight.kg, "65");
    assert_eq!(snapshot.record.weight.lbs, "143.3");
    assert_eq!(snapshot.height_unit, HeightUnit::Cm);
    assert_eq!(snapshot.weight_unit, WeightUnit::Kg);

    assert_eq!(form.last_snapshot(), Some(&snapshot));
}

#[test]
fn test_rejected_submission_produces_no_snapshot() {
    let mut form = filled_form();
    form.set_field(InputField::MobileNumber, "98765");

    assert!(!form.is_valid());
    assert_eq!(form.submit(), Err(SubmitError::FormInvalid));
    assert_eq!(form.last_snapshot(), None);
}

#[test]
fn test_rejected_submission_leaves_prior_snapshot_untouched() {
    let mut form = filled_form();
    let accepted = form.submit().unwrap();

    form.set_field(InputField::MobileNumber, "98765");
    assert_eq!(form.submit(), Err(SubmitError::FormInvalid));
    assert_eq!(form.last_snapshot(), Some(&accepted));
}

#[test]
fn test_resubmission_supersedes_with_independent_snapshot() {
    let mut form = filled_form();
    let first = form.submit().unwrap();

    form.set_field(InputField::WeightKg, "66");
    let second = form.submit().unwrap();

    // The first snapshot is an independent copy, not a view into the form.
    assert_eq!(first.record.weight.kg, "65");
    assert_eq!(second.record.weight.kg, "66");
    assert_eq!(second.record.weight.lbs, "145.5");
    assert_eq!(form.last_snapshot(), Some(&second));
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut form = filled_form();
    form.set_field(InputField::Email, "asha@example.com");
    let snapshot = form.submit().unwrap();

    let json = snapshot.to_json().unwrap();
    let restored = FormSnapshot::from_json(&json).unwrap();
    assert_eq!(snapshot, restored);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["height_unit"], "cm");
    assert_eq!(value["weight_unit"], "kg");
    assert_eq!(value["record"]["email"], "asha@example.com");
}

#[test]
fn test_summary_presenter_renders_metric_snapshot() {
    let mut form = filled_form();
    let snapshot = form.submit().unwrap();

    let summary = SummaryPresenter::new().present(&snapshot);
    assert_eq!(
        summary,
        "Full Name: Asha Rao\n\
         Mobile Number: 9876543210\n\
         Email: Not provided\n\
         Date of Birth: 01/05/1990\n\
         Height: 170 cm\n\
         Weight: 65 kg\n"
    );
}

#[test]
fn test_summary_presenter_renders_imperial_units() {
    let mut form = filled_form();
    form.set_height_unit(HeightUnit::Ft);
    form.set_weight_unit(WeightUnit::Lbs);
    let snapshot = form.submit().unwrap();

    let summary = SummaryPresenter::new().present(&snapshot);
    assert!(summary.contains("Height: 5 ft 7 in\n"));
    assert!(summary.contains("Weight: 143.3 lbs\n"));
}

#[test]
fn test_provided_email_is_rendered_verbatim() {
    let mut form = filled_form();
    form.set_field(InputField::Email, "asha@example.com");
    let snapshot = form.submit().unwrap();

    let summary = SummaryPresenter::new().present(&snapshot);
    assert!(summary.contains("Email: asha@example.com\n"));
}

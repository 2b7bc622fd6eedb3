// ABOUTME: Integration tests for the field rule set
// ABOUTME: Per-field checkers, rule precedence, and parse helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitals_intake::errors::FieldError;
use vitals_intake::models::FieldName;
use vitals_intake::validation::{
    check_date_of_birth, check_email, check_full_name, check_measurement, check_mobile_number,
    parse_decimal, parse_email, validate,
};

use chrono::NaiveDate;

#[test]
fn test_full_name_requires_content() {
    assert_eq!(check_full_name(""), Some(FieldError::FullNameRequired));
    assert_eq!(check_full_name("A"), None);
    // No trimming: whitespace counts as content.
    assert_eq!(check_full_name(" "), None);
}

#[test]
fn test_mobile_number_accepts_ten_digits() {
    assert_eq!(check_mobile_number("9876543210"), None);
    assert_eq!(check_mobile_number("0000000000"), None);
}

#[test]
fn test_mobile_number_length_mismatch() {
    assert_eq!(
        check_mobile_number("98765"),
        Some(FieldError::MobileNumberLength)
    );
    assert_eq!(
        check_mobile_number("98765432101"),
        Some(FieldError::MobileNumberLength)
    );
    assert_eq!(check_mobile_number(""), Some(FieldError::MobileNumberLength));
}

#[test]
fn test_mobile_number_rejects_non_digits() {
    assert_eq!(
        check_mobile_number("98765x3210"),
        Some(FieldError::MobileNumberNonDigit)
    );
    assert_eq!(
        check_mobile_number("9876 43210"),
        Some(FieldError::MobileNumberNonDigit)
    );
}

#[test]
fn test_mobile_number_length_error_takes_precedence() {
    // A 9-character string with a letter reports the length error, not the
    // digit error: first failing rule wins.
    assert_eq!(
        check_mobile_number("98765abc1"),
        Some(FieldError::MobileNumberLength)
    );
}

#[test]
fn test_mobile_number_error_messages() {
    assert_eq!(
        FieldError::MobileNumberLength.message(),
        "Mobile number must be exactly 10 digits"
    );
    assert_eq!(
        FieldError::MobileNumberNonDigit.message(),
        "Mobile number should only contain digits"
    );
}

#[test]
fn test_email_is_optional() {
    assert_eq!(check_email(""), None);
}

#[test]
fn test_email_accepts_standard_addresses() {
    assert_eq!(check_email("asha@example.com"), None);
    assert_eq!(check_email("asha.rao+intake@sub.example.co"), None);
}

#[test]
fn test_email_rejects_malformed_addresses() {
    assert_eq!(check_email("asha"), Some(FieldError::EmailFormat));
    assert_eq!(check_email("asha@"), Some(FieldError::EmailFormat));
    assert_eq!(check_email("asha@example"), Some(FieldError::EmailFormat));
    assert_eq!(check_email("@example.com"), Some(FieldError::EmailFormat));
    assert_eq!(check_email("a b@example.com"), Some(FieldError::EmailFormat));
}

#[test]
fn test_date_of_birth_requires_presence_only() {
    assert_eq!(
        check_date_of_birth(None),
        Some(FieldError::DateOfBirthRequired)
    );
    // No range check: far past and future dates both pass.
    assert_eq!(
        check_date_of_birth(NaiveDate::from_ymd_opt(1900, 1, 1)),
        None
    );
    assert_eq!(
        check_date_of_birth(NaiveDate::from_ymd_opt(2190, 1, 1)),
        None
    );
}

#[test]
fn test_measurement_pattern_accepts_decimals() {
    for raw in ["170", "170.5", ".5", "5.", "", "."] {
        assert_eq!(check_measurement(FieldName::Height, raw), None, "raw={raw:?}");
        assert_eq!(check_measurement(FieldName::Weight, raw), None, "raw={raw:?}");
    }
}

#[test]
fn test_measurement_pattern_rejects_non_decimals() {
    for raw in ["abc", "1.2.3", "-5", "1,5", "5 "] {
        assert_eq!(
            check_measurement(FieldName::Height, raw),
            Some(FieldError::HeightNotNumeric),
            "raw={raw:?}"
        );
        assert_eq!(
            check_measurement(FieldName::Weight, raw),
            Some(FieldError::WeightNotNumeric),
            "raw={raw:?}"
        );
    }
}

#[test]
fn test_validate_dispatches_by_field() {
    assert_eq!(
        validate(FieldName::FullName, ""),
        Some(FieldError::FullNameRequired)
    );
    assert_eq!(validate(FieldName::MobileNumber, "9876543210"), None);
    assert_eq!(
        validate(FieldName::Email, "not-an-email"),
        Some(FieldError::EmailFormat)
    );
    assert_eq!(
        validate(FieldName::DateOfBirth, ""),
        Some(FieldError::DateOfBirthRequired)
    );
    assert_eq!(
        validate(FieldName::Height, "x"),
        Some(FieldError::HeightNotNumeric)
    );
    assert_eq!(
        validate(FieldName::Weight, "x"),
        Some(FieldError::WeightNotNumeric)
    );
}

#[test]
fn test_parse_email_normalizes_absence() {
    assert_eq!(parse_email(""), None);
    assert_eq!(parse_email("bad"), None);
    assert_eq!(parse_email("asha@example.com"), Some("asha@example.com".into()));
}

#[test]
fn test_parse_decimal_handles_degenerate_strings() {
    assert_eq!(parse_decimal("170"), Some(170.0));
    assert_eq!(parse_decimal("170.5"), Some(170.5));
    assert_eq!(parse_decimal("5."), Some(5.0));
    assert_eq!(parse_decimal(".7"), Some(0.7));
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("."), None);
    assert_eq!(parse_decimal("abc"), None);
    assert_eq!(parse_decimal("inf"), None);
    assert_eq!(parse_decimal("NaN"), None);
}

// ABOUTME: Submission snapshot presenter contract and plain-text implementation
// ABOUTME: Renders a read-only summary of an accepted submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitals Intake

//! # Snapshot Presenter
//!
//! The form guarantees that a snapshot handed to a presenter is fully
//! populated and internally consistent: derived fields are already
//! reconciled and the unit selections travel inside the snapshot.
//! Presenters therefore perform no validation and no conversion, only
//! formatting.
//!
//! [`SummaryPresenter`] is the built-in plain-text implementation used by
//! the results sheet; alternative renderers implement [`SnapshotPresenter`].

use vitals_core::models::{FormSnapshot, HeightUnit, WeightUnit};

/// Collaborator contract for rendering an accepted submission.
pub trait SnapshotPresenter {
    /// Render a read-only summary of the snapshot.
    fn present(&self, snapshot: &FormSnapshot) -> String;
}

/// Plain-text summary renderer.
///
/// Renders one labeled line per record field. A missing email renders as
/// "Not provided"; the date renders day-first; height and weight render the
/// unit system that was selected at submit time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryPresenter;

impl SummaryPresenter {
    /// Create a presenter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn height_line(snapshot: &FormSnapshot) -> String {
        match snapshot.height_unit {
            HeightUnit::Cm => format!("{} cm", snapshot.record.height.cm),
            HeightUnit::Ft => {
                let feet = non_blank(&snapshot.record.height.feet);
                let inches = non_blank(&snapshot.record.height.inches);
                format!("{feet} ft {inches} in")
            }
        }
    }

    fn weight_line(snapshot: &FormSnapshot) -> String {
        match snapshot.weight_unit {
            WeightUnit::Kg => format!("{} kg", snapshot.record.weight.kg),
            WeightUnit::Lbs => format!("{} lbs", snapshot.record.weight.lbs),
        }
    }
}

impl SnapshotPresenter for SummaryPresenter {
    fn present(&self, snapshot: &FormSnapshot) -> String {
        let email = snapshot.record.email.as_deref().unwrap_or("Not provided");
        let date_of_birth = snapshot.record.date_of_birth.format("%d/%m/%Y");
        format!(
            "Full Name: {}\nMobile Number: {}\nEmail: {}\nDate of Birth: {}\nHeight: {}\nWeight: {}\n",
            snapshot.record.full_name,
            snapshot.record.mobile_number,
            email,
            date_of_birth,
            Self::height_line(snapshot),
            Self::weight_line(snapshot),
        )
    }
}

// An unedited imperial component displays as zero, not as a hole in the line.
fn non_blank(component: &str) -> &str {
    if component.is_empty() {
        "0"
    } else {
        component
    }
}

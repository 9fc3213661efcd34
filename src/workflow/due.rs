use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::db::enums::StageStatus;

/// A stage due within this many days of today counts as due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Normal,
}

/// Classifies a stage's due date relative to `today`. Pure: callers pass the
/// current date so responses stay deterministic under test.
///
/// Completed work is never overdue, and a stage with no due date is always
/// `Normal` regardless of status.
pub fn classify_due(today: NaiveDate, due_date: Option<NaiveDate>, status: StageStatus) -> DueStatus {
    let Some(due) = due_date else {
        return DueStatus::Normal;
    };

    if due < today && status != StageStatus::Complete {
        return DueStatus::Overdue;
    }

    if due >= today && due <= today + Duration::days(DUE_SOON_WINDOW_DAYS) {
        return DueStatus::DueSoon;
    }

    DueStatus::Normal
}

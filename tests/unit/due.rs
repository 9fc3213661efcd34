use atelier_backend::db::enums::StageStatus;
use atelier_backend::workflow::{DueStatus, classify_due};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn no_due_date_is_always_normal() {
    let today = d(2025, 6, 15);
    for status in [
        StageStatus::Pending,
        StageStatus::InProgress,
        StageStatus::Complete,
        StageStatus::NotApplicable,
    ] {
        assert_eq!(classify_due(today, None, status), DueStatus::Normal);
    }
}

#[test]
fn past_due_date_is_overdue_unless_complete() {
    let today = d(2025, 6, 15);
    let due = Some(d(2025, 6, 14));

    assert_eq!(
        classify_due(today, due, StageStatus::Pending),
        DueStatus::Overdue
    );
    assert_eq!(
        classify_due(today, due, StageStatus::InProgress),
        DueStatus::Overdue
    );
    // Finished work is never overdue, no matter how late it finished.
    assert_eq!(
        classify_due(today, due, StageStatus::Complete),
        DueStatus::Normal
    );
}

#[test]
fn due_soon_window_spans_today_through_three_days_out() {
    let today = d(2025, 6, 15);

    assert_eq!(
        classify_due(today, Some(d(2025, 6, 15)), StageStatus::Pending),
        DueStatus::DueSoon
    );
    assert_eq!(
        classify_due(today, Some(d(2025, 6, 18)), StageStatus::Pending),
        DueStatus::DueSoon
    );
    // One day past the window edge.
    assert_eq!(
        classify_due(today, Some(d(2025, 6, 19)), StageStatus::Pending),
        DueStatus::Normal
    );
}

#[test]
fn due_soon_classification_ignores_status() {
    let today = d(2025, 6, 15);
    let due = Some(d(2025, 6, 16));
    assert_eq!(
        classify_due(today, due, StageStatus::Complete),
        DueStatus::DueSoon
    );
}

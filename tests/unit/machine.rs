use atelier_backend::db::enums::StageStatus;
use atelier_backend::workflow::{StageAction, apply};
use chrono::{TimeZone, Utc};

fn t(secs: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn start_moves_pending_to_in_progress_and_stamps_started_at() {
    let now = t(1_000);
    let outcome = apply(StageStatus::Pending, None, None, StageAction::Start, now).unwrap();
    assert_eq!(outcome.status, StageStatus::InProgress);
    assert_eq!(outcome.started_at, Some(now));
    assert_eq!(outcome.completed_at, None);
}

#[test]
fn start_keeps_an_existing_started_at() {
    let first = t(1_000);
    let later = t(5_000);
    let outcome = apply(
        StageStatus::Pending,
        Some(first),
        None,
        StageAction::Start,
        later,
    )
    .unwrap();
    assert_eq!(outcome.started_at, Some(first));
}

#[test]
fn complete_stamps_completed_at() {
    let started = t(1_000);
    let now = t(2_000);
    let outcome = apply(
        StageStatus::InProgress,
        Some(started),
        None,
        StageAction::Complete,
        now,
    )
    .unwrap();
    assert_eq!(outcome.status, StageStatus::Complete);
    assert_eq!(outcome.started_at, Some(started));
    assert_eq!(outcome.completed_at, Some(now));
}

#[test]
fn close_returns_to_pending_and_clears_started_at() {
    let outcome = apply(
        StageStatus::InProgress,
        Some(t(1_000)),
        None,
        StageAction::Close,
        t(2_000),
    )
    .unwrap();
    assert_eq!(outcome.status, StageStatus::Pending);
    assert_eq!(outcome.started_at, None);
}

#[test]
fn reopen_clears_completed_at_but_keeps_started_at() {
    let started = t(1_000);
    let completed = t(2_000);
    let outcome = apply(
        StageStatus::Complete,
        Some(started),
        Some(completed),
        StageAction::Reopen,
        t(3_000),
    )
    .unwrap();
    assert_eq!(outcome.status, StageStatus::InProgress);
    assert_eq!(outcome.started_at, Some(started));
    assert_eq!(outcome.completed_at, None);
}

#[test]
fn mark_not_applicable_clears_both_timestamps_from_any_active_status() {
    for from in [
        StageStatus::Pending,
        StageStatus::InProgress,
        StageStatus::Complete,
    ] {
        let outcome = apply(
            from,
            Some(t(1_000)),
            Some(t(2_000)),
            StageAction::MarkNotApplicable,
            t(3_000),
        )
        .unwrap();
        assert_eq!(outcome.status, StageStatus::NotApplicable);
        assert_eq!(outcome.started_at, None);
        assert_eq!(outcome.completed_at, None);
    }
}

#[test]
fn reactivating_lands_on_a_clean_pending_stage() {
    // A completed stage marked not applicable and then reactivated must come
    // back pending with no trace of its prior completion.
    let now = t(1_000);
    let skipped = apply(
        StageStatus::Complete,
        Some(t(500)),
        Some(t(900)),
        StageAction::MarkNotApplicable,
        now,
    )
    .unwrap();

    let revived = apply(
        skipped.status,
        skipped.started_at,
        skipped.completed_at,
        StageAction::MarkApplicable,
        t(2_000),
    )
    .unwrap();
    assert_eq!(revived.status, StageStatus::Pending);
    assert_eq!(revived.started_at, None);
    assert_eq!(revived.completed_at, None);
}

#[test]
fn illegal_transitions_are_rejected_and_name_the_offender() {
    let cases = [
        (StageStatus::Pending, StageAction::Complete),
        (StageStatus::Pending, StageAction::Close),
        (StageStatus::Pending, StageAction::Reopen),
        (StageStatus::Pending, StageAction::MarkApplicable),
        (StageStatus::InProgress, StageAction::Start),
        (StageStatus::InProgress, StageAction::Reopen),
        (StageStatus::InProgress, StageAction::MarkApplicable),
        (StageStatus::Complete, StageAction::Start),
        (StageStatus::Complete, StageAction::Complete),
        (StageStatus::Complete, StageAction::Close),
        (StageStatus::Complete, StageAction::MarkApplicable),
        (StageStatus::NotApplicable, StageAction::Start),
        (StageStatus::NotApplicable, StageAction::Complete),
        (StageStatus::NotApplicable, StageAction::Close),
        (StageStatus::NotApplicable, StageAction::Reopen),
        (StageStatus::NotApplicable, StageAction::MarkNotApplicable),
    ];

    for (from, action) in cases {
        let err = apply(from, None, None, action, t(0)).unwrap_err();
        assert_eq!(err.from, from);
        assert_eq!(err.action, action);
        assert!(err.to_string().contains(action.as_str()));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::enums::StageStatus;

/// Intent sent by a client against a stage. `Assign` only changes the assignee
/// and never moves the status; everything else is a status transition handled
/// by [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageAction {
    Start,
    Complete,
    Close,
    Reopen,
    MarkNotApplicable,
    MarkApplicable,
    Assign,
}

impl StageAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageAction::Start => "start",
            StageAction::Complete => "complete",
            StageAction::Close => "close",
            StageAction::Reopen => "reopen",
            StageAction::MarkNotApplicable => "mark_not_applicable",
            StageAction::MarkApplicable => "mark_applicable",
            StageAction::Assign => "assign",
        }
    }
}

impl std::fmt::Display for StageAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// New status and timestamps a legal transition produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub status: StageStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("action '{action}' is not allowed while the stage is '{from}'")]
pub struct TransitionError {
    pub from: StageStatus,
    pub action: StageAction,
}

/// Applies a status transition to a stage. Pure: the caller supplies the clock.
///
/// Timestamp rules:
/// - `start` stamps `started_at` only the first time the stage enters
///   in-progress; a stage closed back to pending and restarted keeps no stale
///   value because `close` clears it.
/// - `complete` always stamps `completed_at`, `reopen` always clears it.
/// - Marking a stage not applicable clears both timestamps, so reactivation
///   lands on a clean pending stage and can never resurrect prior completion
///   state.
pub fn apply(
    from: StageStatus,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    action: StageAction,
    now: DateTime<Utc>,
) -> Result<TransitionOutcome, TransitionError> {
    use StageAction as A;
    use StageStatus as S;

    match (from, action) {
        (S::Pending, A::Start) => Ok(TransitionOutcome {
            status: S::InProgress,
            started_at: started_at.or(Some(now)),
            completed_at,
        }),
        (S::InProgress, A::Complete) => Ok(TransitionOutcome {
            status: S::Complete,
            started_at,
            completed_at: Some(now),
        }),
        (S::InProgress, A::Close) => Ok(TransitionOutcome {
            status: S::Pending,
            started_at: None,
            completed_at,
        }),
        (S::Complete, A::Reopen) => Ok(TransitionOutcome {
            status: S::InProgress,
            started_at,
            completed_at: None,
        }),
        (S::Pending | S::InProgress | S::Complete, A::MarkNotApplicable) => Ok(TransitionOutcome {
            status: S::NotApplicable,
            started_at: None,
            completed_at: None,
        }),
        (S::NotApplicable, A::MarkApplicable) => Ok(TransitionOutcome {
            status: S::Pending,
            started_at: None,
            completed_at: None,
        }),
        _ => Err(TransitionError { from, action }),
    }
}

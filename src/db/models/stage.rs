use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::enums::{MemberRole, PhaseType, StageStatus};
use crate::workflow::machine::StageAction;
use crate::workflow::{DueStatus, classify_due, descriptor};

/// One phase instance of a room. Exactly one row exists per (room, phase type)
/// pair; rows are created when the room is created and never deleted.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::stages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Stage {
    pub id: Uuid,
    pub room_id: Uuid,
    pub phase_type: PhaseType,
    pub status: StageStatus,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::stages)]
pub struct NewStage {
    pub room_id: Uuid,
    pub phase_type: PhaseType,
    pub status: StageStatus,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::stages)]
pub struct StageChangeset {
    pub status: Option<StageStatus>,
    pub assignee_id: Option<Option<Uuid>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub started_at: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub completed_at: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Request/Response models

#[derive(Deserialize, Serialize)]
pub struct StageActionRequest {
    pub action: StageAction,
    /// Only meaningful for `assign`; absent or null unassigns.
    pub assigned_to: Option<Uuid>,
    /// Only meaningful for `complete`; when true and the cascade starts a next
    /// phase that has an assignee, a notification activity is recorded.
    pub notify_next_assignee: Option<bool>,
}

#[derive(Deserialize, Serialize)]
pub struct DueDateRequest {
    pub due_date: Option<NaiveDate>,
}

#[derive(Deserialize, Serialize)]
pub struct BulkAssignRequest {
    /// Phase type -> member id, null to unassign that phase.
    pub assignments: HashMap<PhaseType, Option<Uuid>>,
}

#[derive(Serialize, Clone)]
pub struct StageResponse {
    pub id: Uuid,
    pub room_id: Uuid,
    pub phase_type: PhaseType,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub position: i32,
    pub required_role: Option<MemberRole>,
    pub status: StageStatus,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
    pub due_status: DueStatus,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl StageResponse {
    /// Builds the wire shape, folding in the static phase configuration and the
    /// due-date classification for `today`.
    pub fn from_stage(stage: Stage, today: NaiveDate) -> Self {
        let config = descriptor(stage.phase_type);
        let due_status = classify_due(today, stage.due_date, stage.status);
        StageResponse {
            id: stage.id,
            room_id: stage.room_id,
            phase_type: stage.phase_type,
            label: config.label,
            color: config.color,
            icon: config.icon,
            position: config.position,
            required_role: config.required_role,
            status: stage.status,
            assignee_id: stage.assignee_id,
            due_date: stage.due_date,
            due_status,
            started_at: stage.started_at,
            completed_at: stage.completed_at,
            created_at: stage.created_at,
            updated_at: stage.updated_at,
        }
    }
}

/// Response for a stage mutation: the stage acted on plus every other stage the
/// server changed as a side effect, so clients refetch nothing blindly.
#[derive(Serialize)]
pub struct StageMutationResponse {
    pub stage: StageResponse,
    pub affected: Vec<StageResponse>,
}

#[derive(Serialize)]
pub struct BulkAssignItemOk {
    pub phase_type: PhaseType,
    pub stage_id: Uuid,
    pub assignee_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct BulkAssignItemErr {
    pub phase_type: PhaseType,
    pub error: String,
}

/// Per-item outcome of a bulk assignment. Best-effort semantics: items that
/// applied stay applied, items that failed are reported individually.
#[derive(Serialize)]
pub struct BulkAssignResult {
    pub succeeded: Vec<BulkAssignItemOk>,
    pub failed: Vec<BulkAssignItemErr>,
}

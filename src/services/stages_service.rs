use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::enums::{ActivityKind, StageStatus},
    db::models::api::error_codes,
    db::models::activity::NewActivity,
    db::models::stage::{
        BulkAssignItemErr, BulkAssignItemOk, BulkAssignRequest, BulkAssignResult, DueDateRequest,
        Stage, StageActionRequest, StageChangeset,
    },
    db::repositories::activities::ActivitiesRepo,
    db::repositories::members::MembersRepo,
    db::repositories::rooms::RoomsRepo,
    db::repositories::stages::StagesRepo,
    error::AppError,
    services::context::RequestContext,
    validation::stage::validate_bulk_assignments,
    workflow::{self, StageAction, assignment, phases},
};

pub struct StagesService;

impl StagesService {
    /// Dispatches a stage intent. Returns the updated stage plus every other
    /// stage changed as a side effect (the cascade), so the caller can report
    /// exactly what moved instead of forcing a full refetch.
    pub fn apply_action(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        stage_id: uuid::Uuid,
        req: &StageActionRequest,
    ) -> Result<(Stage, Vec<Stage>), AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            let stage = StagesRepo::find_by_id(conn, stage_id)?
                .ok_or_else(|| AppError::not_found("stage"))?;

            match req.action {
                StageAction::Assign => {
                    let updated = Self::assign(conn, ctx, stage, req.assigned_to)?;
                    Ok((updated, Vec::new()))
                }
                action => Self::transition(conn, ctx, stage, action, req),
            }
        })
    }

    fn transition(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        stage: Stage,
        action: StageAction,
        req: &StageActionRequest,
    ) -> Result<(Stage, Vec<Stage>), AppError> {
        let now = Utc::now();
        let outcome =
            workflow::apply(stage.status, stage.started_at, stage.completed_at, action, now)?;

        let changeset = StageChangeset {
            status: Some(outcome.status),
            started_at: Some(outcome.started_at),
            completed_at: Some(outcome.completed_at),
            updated_at: Some(now),
            ..Default::default()
        };
        let updated = StagesRepo::apply_changeset(conn, stage.id, &changeset)?;

        Self::record(conn, ctx, &updated, Self::activity_for(action), None)?;
        tracing::info!(
            stage_id = %updated.id,
            action = %action,
            from = %stage.status,
            to = %updated.status,
            "stage transition"
        );

        let mut affected = Vec::new();
        if action == StageAction::Complete {
            affected = Self::cascade_after_complete(conn, ctx, &updated, req)?;
        }

        Ok((updated, affected))
    }

    /// Completing a stage auto-starts the next applicable pending stage of the
    /// room, in display order. Skips stages marked not applicable.
    fn cascade_after_complete(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        completed: &Stage,
        req: &StageActionRequest,
    ) -> Result<Vec<Stage>, AppError> {
        let now = Utc::now();
        let mut affected = Vec::new();

        let mut cursor = phases::next_phase(completed.phase_type);
        while let Some(phase) = cursor {
            let Some(next) = StagesRepo::find_by_room_and_phase(conn, completed.room_id, phase)?
            else {
                break;
            };
            match next.status {
                StageStatus::NotApplicable => {
                    cursor = phases::next_phase(phase);
                }
                StageStatus::Pending => {
                    let outcome = workflow::apply(
                        next.status,
                        next.started_at,
                        next.completed_at,
                        StageAction::Start,
                        now,
                    )?;
                    let changeset = StageChangeset {
                        status: Some(outcome.status),
                        started_at: Some(outcome.started_at),
                        completed_at: Some(outcome.completed_at),
                        updated_at: Some(now),
                        ..Default::default()
                    };
                    let started = StagesRepo::apply_changeset(conn, next.id, &changeset)?;
                    Self::record(conn, ctx, &started, ActivityKind::StageStarted, None)?;

                    if req.notify_next_assignee.unwrap_or(false) {
                        if let Some(assignee) = started.assignee_id {
                            Self::record(
                                conn,
                                ctx,
                                &started,
                                ActivityKind::AssigneeNotified,
                                Some(assignee.to_string()),
                            )?;
                            tracing::info!(
                                stage_id = %started.id,
                                assignee_id = %assignee,
                                "next-phase assignee notified"
                            );
                        }
                    }
                    affected.push(started);
                    break;
                }
                // Already running or done: nothing to cascade into.
                _ => break,
            }
        }

        Ok(affected)
    }

    fn assign(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        stage: Stage,
        assigned_to: Option<uuid::Uuid>,
    ) -> Result<Stage, AppError> {
        if stage.status == StageStatus::NotApplicable {
            return Err(AppError::conflict_with_code(
                "Cannot assign a stage marked not applicable",
                None,
                error_codes::STAGE_NOT_APPLICABLE,
            ));
        }

        if let Some(member_id) = assigned_to {
            let member = MembersRepo::find_by_id(conn, member_id)?
                .ok_or_else(|| AppError::not_found("team member"))?;
            if !member.is_active {
                return Err(AppError::validation("Team member is not active"));
            }
            if !assignment::role_is_eligible(stage.phase_type, member.role) {
                let required = phases::descriptor(stage.phase_type)
                    .required_role
                    .map(|r| r.as_str())
                    .unwrap_or("any");
                return Err(AppError::conflict_with_code(
                    format!(
                        "'{}' requires the '{}' role, but {} has the '{}' role",
                        phases::descriptor(stage.phase_type).label,
                        required,
                        member.name,
                        member.role.as_str()
                    ),
                    Some("assigned_to".to_string()),
                    error_codes::STAGE_ROLE_MISMATCH,
                ));
            }
        }

        let changeset = StageChangeset {
            assignee_id: Some(assigned_to),
            updated_at: Some(Utc::now()),
            ..Default::default()
        };
        let updated = StagesRepo::apply_changeset(conn, stage.id, &changeset)?;

        let kind = if assigned_to.is_some() {
            ActivityKind::StageAssigned
        } else {
            ActivityKind::StageUnassigned
        };
        Self::record(conn, ctx, &updated, kind, assigned_to.map(|m| m.to_string()))?;

        Ok(updated)
    }

    pub fn set_due_date(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        stage_id: uuid::Uuid,
        req: &DueDateRequest,
    ) -> Result<Stage, AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            let stage = StagesRepo::find_by_id(conn, stage_id)?
                .ok_or_else(|| AppError::not_found("stage"))?;

            if stage.status == StageStatus::NotApplicable {
                return Err(AppError::conflict_with_code(
                    "Cannot set a due date on a stage marked not applicable",
                    None,
                    error_codes::STAGE_NOT_APPLICABLE,
                ));
            }

            let changeset = StageChangeset {
                due_date: Some(req.due_date),
                updated_at: Some(Utc::now()),
                ..Default::default()
            };
            let updated = StagesRepo::apply_changeset(conn, stage.id, &changeset)?;

            let detail = req
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "cleared".to_string());
            Self::record(conn, ctx, &updated, ActivityKind::DueDateChanged, Some(detail))?;

            Ok(updated)
        })
    }

    /// Best-effort bulk assignment: each phase is applied independently and the
    /// result reports every item, so one failure neither aborts the rest nor
    /// gets silently absorbed into a success.
    pub fn bulk_assign(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        room_id: uuid::Uuid,
        req: &BulkAssignRequest,
    ) -> Result<BulkAssignResult, AppError> {
        validate_bulk_assignments(&req.assignments)?;

        let _room =
            RoomsRepo::find_by_id(conn, room_id)?.ok_or_else(|| AppError::not_found("room"))?;

        let mut result = BulkAssignResult {
            succeeded: Vec::new(),
            failed: Vec::new(),
        };

        // Display order keeps the report deterministic regardless of map order.
        for phase in phases::ordered_phases() {
            let Some(&member) = req.assignments.get(&phase) else {
                continue;
            };

            let item = conn.transaction::<_, AppError, _>(|conn| {
                let stage = StagesRepo::find_by_room_and_phase(conn, room_id, phase)?
                    .ok_or_else(|| AppError::not_found("stage"))?;
                Self::assign(conn, ctx, stage, member)
            });

            match item {
                Ok(stage) => result.succeeded.push(BulkAssignItemOk {
                    phase_type: phase,
                    stage_id: stage.id,
                    assignee_id: stage.assignee_id,
                }),
                Err(e) => result.failed.push(BulkAssignItemErr {
                    phase_type: phase,
                    error: e.to_string(),
                }),
            }
        }

        Ok(result)
    }

    fn record(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        stage: &Stage,
        kind: ActivityKind,
        detail: Option<String>,
    ) -> Result<(), AppError> {
        ActivitiesRepo::insert(
            conn,
            &NewActivity {
                room_id: stage.room_id,
                stage_id: Some(stage.id),
                actor_id: ctx.user_id,
                kind,
                detail,
            },
        )?;
        Ok(())
    }

    fn activity_for(action: StageAction) -> ActivityKind {
        match action {
            StageAction::Start => ActivityKind::StageStarted,
            StageAction::Complete => ActivityKind::StageCompleted,
            StageAction::Close => ActivityKind::StageClosed,
            StageAction::Reopen => ActivityKind::StageReopened,
            StageAction::MarkNotApplicable => ActivityKind::StageMarkedNotApplicable,
            StageAction::MarkApplicable => ActivityKind::StageReactivated,
            // Assign is dispatched before reaching here.
            StageAction::Assign => ActivityKind::StageAssigned,
        }
    }
}

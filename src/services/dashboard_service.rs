use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    db::enums::StageStatus,
    db::models::stage::Stage,
    db::repositories::stages::StagesRepo,
    error::AppError,
};

/// Aggregate counts the dashboard polls for. Computed from the stages table;
/// cached in Redis by the route layer since clients poll on an interval.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DashboardStats {
    pub pending: i64,
    pub in_progress: i64,
    pub complete: i64,
    pub not_applicable: i64,
    pub overdue: i64,
    pub total: i64,
}

pub struct DashboardService;

impl DashboardService {
    pub fn compute_stats(
        conn: &mut PgConnection,
        today: NaiveDate,
    ) -> Result<DashboardStats, AppError> {
        let mut stats = DashboardStats::default();
        for (status, count) in StagesRepo::count_by_status(conn)? {
            match status {
                StageStatus::Pending => stats.pending = count,
                StageStatus::InProgress => stats.in_progress = count,
                StageStatus::Complete => stats.complete = count,
                StageStatus::NotApplicable => stats.not_applicable = count,
            }
            stats.total += count;
        }
        stats.overdue = StagesRepo::count_overdue(conn, today)?;
        Ok(stats)
    }

    /// Open stages assigned to the caller, soonest due date first.
    pub fn my_tasks(
        conn: &mut PgConnection,
        member_id: uuid::Uuid,
    ) -> Result<Vec<Stage>, AppError> {
        let stages = StagesRepo::list_assigned_open(conn, member_id)?;
        Ok(stages)
    }

    pub fn last_completed(conn: &mut PgConnection) -> Result<Option<Stage>, AppError> {
        let stage = StagesRepo::find_last_completed(conn)?;
        Ok(stage)
    }
}

use chrono::NaiveDate;
use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::db::enums::{PhaseType, StageStatus};
use crate::db::models::stage::{NewStage, Stage, StageChangeset};
use crate::workflow::ordered_phases;

pub struct StagesRepo;

impl StagesRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        stage_id: uuid::Uuid,
    ) -> Result<Option<Stage>, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages.filter(id.eq(stage_id)).first::<Stage>(conn).optional()
    }

    pub fn list_by_room(
        conn: &mut PgConnection,
        room: uuid::Uuid,
    ) -> Result<Vec<Stage>, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages.filter(room_id.eq(room)).load::<Stage>(conn)
    }

    pub fn find_by_room_and_phase(
        conn: &mut PgConnection,
        room: uuid::Uuid,
        phase: PhaseType,
    ) -> Result<Option<Stage>, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages
            .filter(room_id.eq(room))
            .filter(phase_type.eq(phase))
            .first::<Stage>(conn)
            .optional()
    }

    /// Seeds one pending stage per phase type for a freshly created room.
    pub fn insert_for_room(
        conn: &mut PgConnection,
        room: uuid::Uuid,
    ) -> Result<Vec<Stage>, diesel::result::Error> {
        let new_stages: Vec<NewStage> = ordered_phases()
            .map(|phase| NewStage {
                room_id: room,
                phase_type: phase,
                status: StageStatus::Pending,
            })
            .collect();

        diesel::insert_into(crate::schema::stages::table)
            .values(&new_stages)
            .get_results(conn)
    }

    pub fn apply_changeset(
        conn: &mut PgConnection,
        stage_id: uuid::Uuid,
        changeset: &StageChangeset,
    ) -> Result<Stage, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        diesel::update(stages.filter(id.eq(stage_id)))
            .set(changeset)
            .get_result(conn)
    }

    pub fn count_by_status(
        conn: &mut PgConnection,
    ) -> Result<Vec<(StageStatus, i64)>, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages
            .group_by(status)
            .select((status, count_star()))
            .load::<(StageStatus, i64)>(conn)
    }

    pub fn count_overdue(
        conn: &mut PgConnection,
        today: NaiveDate,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages
            .filter(due_date.lt(today))
            .filter(status.ne(StageStatus::Complete))
            .select(count_star())
            .first(conn)
    }

    pub fn list_assigned_open(
        conn: &mut PgConnection,
        member: uuid::Uuid,
    ) -> Result<Vec<Stage>, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages
            .filter(assignee_id.eq(member))
            .filter(status.eq_any([StageStatus::Pending, StageStatus::InProgress]))
            .order(due_date.asc().nulls_last())
            .load::<Stage>(conn)
    }

    pub fn find_last_completed(
        conn: &mut PgConnection,
    ) -> Result<Option<Stage>, diesel::result::Error> {
        use crate::schema::stages::dsl::*;
        stages
            .filter(completed_at.is_not_null())
            .order(completed_at.desc())
            .first::<Stage>(conn)
            .optional()
    }
}

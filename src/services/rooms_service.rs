use diesel::prelude::*;

use crate::{
    db::enums::ActivityKind,
    db::models::activity::NewActivity,
    db::models::room::{NewRoom, Room},
    db::models::stage::Stage,
    db::repositories::activities::ActivitiesRepo,
    db::repositories::projects::ProjectsRepo,
    db::repositories::rooms::RoomsRepo,
    db::repositories::stages::StagesRepo,
    error::AppError,
    services::context::RequestContext,
    validation::room::validate_create_room,
    workflow::phases,
};

pub struct RoomsService;

impl RoomsService {
    /// Creates a room and seeds one pending stage per phase type, atomically.
    pub fn create_room(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        project_id: uuid::Uuid,
        name: &str,
    ) -> Result<(Room, Vec<Stage>), AppError> {
        validate_create_room(name)?;

        let _project = ProjectsRepo::find_by_id(conn, project_id)?
            .ok_or_else(|| AppError::not_found("project"))?;

        conn.transaction::<_, AppError, _>(|conn| {
            let room = RoomsRepo::insert(
                conn,
                &NewRoom {
                    project_id,
                    name: name.to_string(),
                },
            )?;
            let stages = StagesRepo::insert_for_room(conn, room.id)?;

            ActivitiesRepo::insert(
                conn,
                &NewActivity {
                    room_id: room.id,
                    stage_id: None,
                    actor_id: ctx.user_id,
                    kind: ActivityKind::RoomCreated,
                    detail: Some(room.name.clone()),
                },
            )?;

            Ok((room, Self::in_display_order(stages)))
        })
    }

    pub fn get_room(
        conn: &mut PgConnection,
        room_id: uuid::Uuid,
    ) -> Result<(Room, Vec<Stage>), AppError> {
        let room =
            RoomsRepo::find_by_id(conn, room_id)?.ok_or_else(|| AppError::not_found("room"))?;
        let stages = StagesRepo::list_by_room(conn, room_id)?;
        Ok((room, Self::in_display_order(stages)))
    }

    pub fn list_by_project(
        conn: &mut PgConnection,
        project_id: uuid::Uuid,
    ) -> Result<Vec<Room>, AppError> {
        let _project = ProjectsRepo::find_by_id(conn, project_id)?
            .ok_or_else(|| AppError::not_found("project"))?;
        let rooms = RoomsRepo::list_by_project(conn, project_id)?;
        Ok(rooms)
    }

    fn in_display_order(mut stages: Vec<Stage>) -> Vec<Stage> {
        stages.sort_by_key(|s| phases::descriptor(s.phase_type).position);
        stages
    }
}

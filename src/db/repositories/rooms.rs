use diesel::prelude::*;

use crate::db::models::room::{NewRoom, Room};

pub struct RoomsRepo;

impl RoomsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_room: &NewRoom,
    ) -> Result<Room, diesel::result::Error> {
        diesel::insert_into(crate::schema::rooms::table)
            .values(new_room)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        room_id: uuid::Uuid,
    ) -> Result<Option<Room>, diesel::result::Error> {
        use crate::schema::rooms::dsl::*;
        rooms.filter(id.eq(room_id)).first::<Room>(conn).optional()
    }

    pub fn list_by_project(
        conn: &mut PgConnection,
        project: uuid::Uuid,
    ) -> Result<Vec<Room>, diesel::result::Error> {
        use crate::schema::rooms::dsl::*;
        rooms
            .filter(project_id.eq(project))
            .order(created_at.asc())
            .load::<Room>(conn)
    }
}

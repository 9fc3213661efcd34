use diesel::prelude::*;

use crate::db::models::activity::{Activity, NewActivity};

pub struct ActivitiesRepo;

impl ActivitiesRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_activity: &NewActivity,
    ) -> Result<Activity, diesel::result::Error> {
        diesel::insert_into(crate::schema::activities::table)
            .values(new_activity)
            .get_result(conn)
    }

    pub fn list_by_room(
        conn: &mut PgConnection,
        room: uuid::Uuid,
        limit: i64,
    ) -> Result<Vec<Activity>, diesel::result::Error> {
        use crate::schema::activities::dsl::*;
        activities
            .filter(room_id.eq(room))
            .order(created_at.desc())
            .limit(limit)
            .load::<Activity>(conn)
    }
}

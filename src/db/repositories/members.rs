use diesel::prelude::*;

use crate::db::models::member::TeamMember;

pub struct MembersRepo;

impl MembersRepo {
    pub fn list_active(conn: &mut PgConnection) -> Result<Vec<TeamMember>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(is_active.eq(true))
            .select(TeamMember::as_select())
            .order(name.asc())
            .load::<TeamMember>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        member_id: uuid::Uuid,
    ) -> Result<Option<TeamMember>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(id.eq(member_id))
            .select(TeamMember::as_select())
            .first::<TeamMember>(conn)
            .optional()
    }

    /// Login lookup: the member plus the stored password hash.
    pub fn find_credentials_by_email(
        conn: &mut PgConnection,
        member_email: &str,
    ) -> Result<Option<(TeamMember, String)>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(email.eq(member_email))
            .select((TeamMember::as_select(), password_hash))
            .first::<(TeamMember, String)>(conn)
            .optional()
    }
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::enums::MemberRole;

/// A member of the design team. The selectable model deliberately omits
/// `password_hash`; the login path reads credentials through its own query.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub avatar_url: Option<String>,
    pub password_hash: String,
}

#[derive(Serialize, Clone)]
pub struct TeamMemberResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub avatar_url: Option<String>,
}

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        TeamMemberResponse {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role,
            avatar_url: member.avatar_url.clone(),
        }
    }
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        TeamMemberResponse::from(&member)
    }
}

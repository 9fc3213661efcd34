use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::enums::ActivityKind;

/// One recorded workflow event. The feed only ever consumes these; nothing is
/// updated or deleted after insert.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Activity {
    pub id: Uuid,
    pub room_id: Uuid,
    pub stage_id: Option<Uuid>,
    pub actor_id: Uuid,
    pub kind: ActivityKind,
    pub detail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::activities)]
pub struct NewActivity {
    pub room_id: Uuid,
    pub stage_id: Option<Uuid>,
    pub actor_id: Uuid,
    pub kind: ActivityKind,
    pub detail: Option<String>,
}

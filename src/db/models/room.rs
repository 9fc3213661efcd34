use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::stage::StageResponse;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Room {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct NewRoom {
    pub project_id: Uuid,
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 255, message = "Room name must be between 1 and 255 characters"))]
    pub name: String,
}

#[derive(Serialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub stages: Vec<StageResponse>,
}

impl RoomResponse {
    pub fn new(room: Room, stages: Vec<StageResponse>) -> Self {
        RoomResponse {
            id: room.id,
            project_id: room.project_id,
            name: room.name,
            created_at: room.created_at,
            updated_at: room.updated_at,
            stages,
        }
    }
}

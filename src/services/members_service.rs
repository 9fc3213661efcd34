use diesel::prelude::*;

use crate::{
    db::models::member::TeamMember,
    db::repositories::members::MembersRepo,
    db::repositories::stages::StagesRepo,
    error::AppError,
    workflow::assignment,
};

pub struct MembersService;

impl MembersService {
    pub fn list(
        conn: &mut PgConnection,
        search: Option<&str>,
    ) -> Result<Vec<TeamMember>, AppError> {
        let members = MembersRepo::list_active(conn)?;
        Ok(Self::filtered(members, search))
    }

    /// Members eligible for assignment to a stage, role-filtered by the
    /// stage's phase configuration and optionally narrowed by a search query.
    pub fn eligible_for_stage(
        conn: &mut PgConnection,
        stage_id: uuid::Uuid,
        search: Option<&str>,
    ) -> Result<Vec<TeamMember>, AppError> {
        let stage =
            StagesRepo::find_by_id(conn, stage_id)?.ok_or_else(|| AppError::not_found("stage"))?;
        let members = MembersRepo::list_active(conn)?;
        let eligible: Vec<TeamMember> = assignment::eligible_members(stage.phase_type, &members)
            .into_iter()
            .cloned()
            .collect();
        Ok(Self::filtered(eligible, search))
    }

    fn filtered(members: Vec<TeamMember>, search: Option<&str>) -> Vec<TeamMember> {
        match search {
            Some(query) if !query.trim().is_empty() => assignment::search_members(&members, query)
                .into_iter()
                .cloned()
                .collect(),
            _ => members,
        }
    }
}

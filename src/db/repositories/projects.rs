use diesel::prelude::*;

use crate::db::models::project::{NewProject, Project};

pub struct ProjectsRepo;

impl ProjectsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_project: &NewProject,
    ) -> Result<Project, diesel::result::Error> {
        diesel::insert_into(crate::schema::projects::table)
            .values(new_project)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        project_id: uuid::Uuid,
    ) -> Result<Option<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects
            .filter(id.eq(project_id))
            .first::<Project>(conn)
            .optional()
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects.order(created_at.desc()).load::<Project>(conn)
    }
}

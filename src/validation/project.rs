use crate::error::AppError;

pub fn validate_create_project(name: &str, client_name: &Option<String>) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Project name is required"));
    }
    if name.len() > 255 {
        return Err(AppError::validation(
            "Project name must be at most 255 characters",
        ));
    }
    if let Some(client) = client_name {
        if client.len() > 255 {
            return Err(AppError::validation(
                "Client name must be at most 255 characters",
            ));
        }
    }
    Ok(())
}

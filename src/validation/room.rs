use crate::error::AppError;

pub fn validate_create_room(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Room name is required"));
    }
    if name.len() > 255 {
        return Err(AppError::validation(
            "Room name must be at most 255 characters",
        ));
    }
    Ok(())
}

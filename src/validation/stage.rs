use std::collections::HashMap;
use uuid::Uuid;

use crate::db::enums::PhaseType;
use crate::error::AppError;

pub fn validate_bulk_assignments(
    assignments: &HashMap<PhaseType, Option<Uuid>>,
) -> Result<(), AppError> {
    if assignments.is_empty() {
        return Err(AppError::validation(
            "Bulk assignment requires at least one phase",
        ));
    }
    Ok(())
}

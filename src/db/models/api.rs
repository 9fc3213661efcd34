use serde::Serialize;

// Unified API response envelope
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn created(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 201,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn validation_error(errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code: 400,
            message: "Validation failed".to_string(),
            data: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::failure(401, message, None, "UNAUTHORIZED")
    }

    pub fn not_found(message: &str) -> Self {
        Self::failure(404, message, None, "NOT_FOUND")
    }

    pub fn bad_request(message: &str) -> Self {
        Self::failure(400, message, None, "BAD_REQUEST")
    }

    pub fn conflict(message: &str, field: Option<String>, error_code: &str) -> Self {
        Self::failure(409, message, field, error_code)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::failure(500, message, None, "INTERNAL_ERROR")
    }

    fn failure(code: u16, message: &str, field: Option<String>, error_code: &str) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field,
                code: error_code.to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// Stable business error codes
pub mod error_codes {
    pub const AUTH_USER_NOT_FOUND: &str = "AUTH_001";
    pub const AUTH_INVALID_PASSWORD: &str = "AUTH_002";
    pub const AUTH_ACCOUNT_DISABLED: &str = "AUTH_003";
    pub const AUTH_INVALID_TOKEN: &str = "AUTH_004";

    pub const STAGE_INVALID_TRANSITION: &str = "STAGE_001";
    pub const STAGE_ROLE_MISMATCH: &str = "STAGE_002";
    pub const STAGE_NOT_APPLICABLE: &str = "STAGE_003";

    pub const SYSTEM_DATABASE_ERROR: &str = "SYSTEM_001";
    pub const SYSTEM_CACHE_ERROR: &str = "SYSTEM_002";
}

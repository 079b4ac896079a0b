//! Error handling for the weather history service
//!
//! Provides consistent error responses in English and Korean

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::StatisticsError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ko: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Lookup errors
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("No data found for {month}-{day}")]
    NoDataForDate { month: u32, day: u32 },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Data errors
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<StatisticsError> for AppError {
    fn from(err: StatisticsError) -> Self {
        match err {
            StatisticsError::NoData { month, day } => AppError::NoDataForDate { month, day },
        }
    }
}

impl AppError {
    /// Validation failure on a single named field
    pub fn field(field: &str, message: &str, message_ko: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_ko: message_ko.to_string(),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::CityNotFound(_) | AppError::NoDataForDate { .. } | AppError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Archive(_)
            | AppError::Configuration(_)
            | AppError::Io(_)
            | AppError::Internal(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_ko: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::Validation {
                field,
                message,
                message_ko,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_ko: message_ko.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationError(msg) => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: msg.clone(),
                message_ko: format!("입력값이 올바르지 않습니다: {}", msg),
                field: None,
            },
            AppError::CityNotFound(city) => ErrorDetail {
                code: "CITY_NOT_FOUND".to_string(),
                message_en: format!("City not found: {}", city),
                message_ko: format!("도시를 찾을 수 없습니다: {}", city),
                field: Some("city".to_string()),
            },
            AppError::NoDataForDate { month, day } => ErrorDetail {
                code: "NO_DATA_FOR_DATE".to_string(),
                message_en: format!("No data found for {}-{}", month, day),
                message_ko: format!("{}월 {}일의 데이터가 없습니다", month, day),
                field: None,
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_ko: format!("{}을(를) 찾을 수 없습니다", resource),
                field: None,
            },
            AppError::Archive(_) => ErrorDetail {
                code: "ARCHIVE_ERROR".to_string(),
                message_en: "Weather data could not be read".to_string(),
                message_ko: "날씨 데이터를 읽을 수 없습니다".to_string(),
                field: None,
            },
            AppError::Configuration(_) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: "Server is misconfigured".to_string(),
                message_ko: "서버 설정에 문제가 있습니다".to_string(),
                field: None,
            },
            AppError::Io(_) | AppError::Internal(_) | AppError::InternalError(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: "Internal server error".to_string(),
                message_ko: "서버 내부 오류가 발생했습니다".to_string(),
                field: None,
            },
        };

        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

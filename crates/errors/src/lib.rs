//! tienda-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
            Self::Database(_) => 500,
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::NotFound(_) => "https://api.tienda.dev/problems/not-found".to_string(),
            Self::Internal(_) => "https://api.tienda.dev/problems/internal".to_string(),
            Self::Database(_) => "https://api.tienda.dev/problems/database".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource Not Found".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
            Self::Database(_) => "Database Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = self.to_problem_details();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(problem)).into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_code() {
        let err = AppError::not_found("Product not found");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_problem_details_shape() {
        let problem = AppError::not_found("Product not found").to_problem_details();
        assert_eq!(problem.status, 404);
        assert_eq!(problem.title, "Resource Not Found");
        assert_eq!(problem.detail, "Not found: Product not found");
        assert!(problem.r#type.ends_with("/not-found"));
    }

    #[test]
    fn test_database_maps_to_500() {
        let err = AppError::database("connection refused");
        assert_eq!(err.status_code(), 500);
    }
}

//! Maps validation and storage failures onto HTTP responses.

use crate::db::StorageError;
use crate::utils::validation::ValidationError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, From};
use serde_json::json;
use tracing::error;

#[derive(Debug, Display, From)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    Validation(ValidationError),

    #[display(fmt = "{}", _0)]
    Storage(StorageError),

    #[display(fmt = "Leave request not found")]
    #[from(ignore)]
    LeaveRequestNotFound,

    #[display(fmt = "Store lock poisoned")]
    #[from(ignore)]
    LockPoisoned,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(StorageError::EmployeeNotFound(_)) => StatusCode::BAD_REQUEST,
            ApiError::Storage(StorageError::LeaveRequestNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::LeaveRequestNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(
                StorageError::Corrupt { .. }
                | StorageError::Io { .. }
                | StorageError::IdsExhausted(_),
            )
            | ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
            return HttpResponse::build(status).json(json!({
                "message": "Internal Server Error"
            }));
        }

        match self {
            ApiError::Validation(e) => HttpResponse::build(status).json(json!({
                "message": "Validation failed",
                "errors": e.errors
            })),
            _ => HttpResponse::build(status).json(json!({
                "message": self.to_string()
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;
    use std::io;

    async fn body(err: ApiError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(ApiError::from(StorageError::EmployeeNotFound(7)), StatusCode::BAD_REQUEST)]
    #[case(ApiError::from(StorageError::LeaveRequestNotFound(7)), StatusCode::NOT_FOUND)]
    #[case(ApiError::LeaveRequestNotFound, StatusCode::NOT_FOUND)]
    #[case(ApiError::from(ValidationError::default()), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ApiError::LockPoisoned, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(ApiError::from(StorageError::IdsExhausted("employee")), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_mapping(#[case] err: ApiError, #[case] expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[actix_web::test]
    async fn missing_employee_message_is_kept() {
        let (status, value) = body(StorageError::EmployeeNotFound(999).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["message"], "Employee 999 does not exist");
    }

    #[actix_web::test]
    async fn validation_errors_list_fields() {
        let mut errors = ValidationError::default();
        errors.push("name", "Employee name cannot be empty");

        let (_, value) = body(errors.into()).await;
        assert_eq!(value["errors"][0]["field"], "name");
        assert_eq!(value["errors"][0]["message"], "Employee name cannot be empty");
    }

    #[actix_web::test]
    async fn io_details_are_not_leaked() {
        let err = StorageError::Io {
            path: "/secret/data.json".to_string(),
            source: io::Error::other("disk full"),
        };
        let (status, value) = body(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(value, json!({"message": "Internal Server Error"}));
    }
}

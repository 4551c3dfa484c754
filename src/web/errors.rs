use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::ActivityError;

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound { .. } => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp { .. } | ActivityError::NotRegistered { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        detail_response(self.status(), self.to_string())
    }
}

/// Error returned by the activity handlers: either a directory rejection or
/// a request whose query string could not be read.
#[derive(Debug)]
pub enum ApiError {
    Activity(ActivityError),
    InvalidQuery(QueryRejection),
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        ApiError::Activity(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Activity(err) => err.into_response(),
            ApiError::InvalidQuery(rejection) => {
                detail_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
        }
    }
}

fn detail_response(status: StatusCode, detail: String) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        let not_found = ActivityError::NotFound { activity: "Knitting".into() };
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let dup = ActivityError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "a@mergington.edu".into(),
        };
        assert_eq!(dup.status(), StatusCode::BAD_REQUEST);
        assert_eq!(dup.into_response().status(), StatusCode::BAD_REQUEST);

        let absent = ActivityError::NotRegistered {
            activity: "Chess Club".into(),
            email: "a@mergington.edu".into(),
        };
        assert_eq!(absent.status(), StatusCode::BAD_REQUEST);
    }
}

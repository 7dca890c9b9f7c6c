use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::models::map::MapError;
use domain::services::geocoding::GeocodingError;
use domain::services::map_search::SearchFailure;
use domain::store::FormError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    /// Not-found error naming the missing record.
    pub fn record_not_found(kind: &str, id: &str) -> Self {
        ApiError::NotFound(format!("{} {} not found", kind, id))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg.clone()),
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg.clone(),
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<MapError> for ApiError {
    fn from(err: MapError) -> Self {
        match err {
            MapError::InvalidRadius(_) | MapError::InvalidCoordinate(_) => {
                ApiError::Validation(err.to_string())
            }
            MapError::LocationNotFound => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<SearchFailure> for ApiError {
    fn from(failure: SearchFailure) -> Self {
        match &failure.0 {
            GeocodingError::Disabled => ApiError::ServiceUnavailable(failure.0.to_string()),
            GeocodingError::Status(_) | GeocodingError::Request(_) => {
                tracing::error!(error = %failure.0, "Geocoding service failed");
                ApiError::BadGateway(failure.0.to_string())
            }
            GeocodingError::NoResults => MapError::from(failure).into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();
        messages.sort();

        ApiError::Validation(messages.join("; "))
    }
}

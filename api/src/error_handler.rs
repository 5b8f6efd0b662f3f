use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use query_relay::RelayError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
///
/// Malformed request bodies never reach this type: extractor rejections
/// take the framework path and are rewritten by the JSON middleware.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert `RelayError` to `AppError::Http`.
///
/// Every relay failure — missing key, auth, quota, network, undecodable
/// upstream body — surfaces as one generic upstream error; the caller is
/// not told which kind it was.
impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::Http {
            status: StatusCode::BAD_GATEWAY,
            code: "UPSTREAM_ERROR",
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_relay::ConfigError;

    #[test]
    fn relay_errors_map_to_bad_gateway() {
        let err: AppError = RelayError::from(ConfigError::MissingVar("OPENAI_API_KEY")).into();
        match err {
            AppError::Http { status, code, .. } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(code, "UPSTREAM_ERROR");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn server_side_errors_are_internal() {
        let err = AppError::Bind(std::io::Error::other("address in use"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "BIND_ERROR");

        let err = AppError::Server(std::io::Error::other("accept failed"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "SERVER_ERROR");
    }

    #[test]
    fn http_errors_keep_their_status_and_code() {
        let err = AppError::Http {
            status: StatusCode::BAD_GATEWAY,
            code: "UPSTREAM_ERROR",
            message: "quota exceeded".into(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
    }
}

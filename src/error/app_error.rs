use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError {
        context: String,
        source: sqlx::Error,
    },
    ConnectionUnavailable(String),
    MigrationError(sqlx::migrate::MigrateError),
    ConfigError(String),
    NotFound(String),
    BadRequest {
        message: String,
        error: String,
    },
}

impl AppError {
    /// Wraps a store error with the message shown to the client.
    ///
    /// Meant for `map_err`: `.map_err(AppError::database("Failed to get product."))`.
    pub fn database(context: &str) -> impl FnOnce(sqlx::Error) -> Self + '_ {
        move |source| AppError::DatabaseError {
            context: context.to_string(),
            source,
        }
    }

    pub fn unavailable(context: &str) -> Self {
        AppError::ConnectionUnavailable(context.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::DatabaseError { .. }
            | AppError::ConnectionUnavailable(_)
            | AppError::MigrationError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError { context, source } => write!(f, "{}: {}", context, source),
            AppError::ConnectionUnavailable(context) => {
                write!(f, "{}: database connection unavailable", context)
            }
            AppError::MigrationError(e) => write!(f, "Migration error: {}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest { message, error } => write!(f, "{}: {}", message, error),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::DatabaseError { source, .. } => Some(source),
            AppError::MigrationError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError {
            context: "Database error.".to_string(),
            source: err,
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::MigrationError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: "Invalid request body.".to_string(),
            error: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Unroutable path parameter: {}", rejection.body_text());
        AppError::NotFound("Resource not found.".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::DatabaseError { context, source } => {
                tracing::error!("{}: {:?}", context, source);
                json!({ "message": context, "error": source.to_string() })
            }
            AppError::ConnectionUnavailable(context) => {
                tracing::error!("{}: no database connection", context);
                json!({ "message": context, "error": "database connection unavailable" })
            }
            AppError::MigrationError(e) => {
                tracing::error!("Migration error: {}", e);
                json!({ "message": "Database migration failed." })
            }
            AppError::ConfigError(msg) => {
                tracing::error!("Configuration error: {}", msg);
                json!({ "message": "Server configuration error." })
            }
            AppError::NotFound(message) => json!({ "message": message }),
            AppError::BadRequest { message, error } => json!({ "message": message, "error": error }),
        };

        (status, Json(body)).into_response()
    }
}

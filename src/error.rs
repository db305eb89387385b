use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Datasource not found: {0}")]
    DatasourceNotFound(String),

    #[error("Datasource {0} is not a Webhook datasource")]
    WrongDatasourceType(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Payload must be a JSON object")]
    PayloadNotObject,

    #[error("HMAC validation failed")]
    HmacValidation,

    #[error("Missing signature header")]
    MissingSignature,

    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    #[error("Failed to send event to fault center queue")]
    QueueSend,

    #[error("Database error: {0}")]
    Database(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Secret not found: {0}")]
    SecretNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::DatasourceNotFound(id) => (StatusCode::NOT_FOUND, format!("Datasource not found: {}", id)),
            AppError::WrongDatasourceType(id) => (StatusCode::BAD_REQUEST, format!("Datasource {} is not a Webhook datasource", id)),
            AppError::MissingRequiredField(field) => (StatusCode::BAD_REQUEST, format!("Missing required field: {}", field)),
            AppError::PayloadNotObject => (StatusCode::BAD_REQUEST, "Payload must be a JSON object".to_string()),
            AppError::HmacValidation => (StatusCode::UNAUTHORIZED, "Invalid signature".to_string()),
            AppError::MissingSignature => (StatusCode::BAD_REQUEST, "Missing signature header".to_string()),
            AppError::InvalidSignatureFormat => (StatusCode::BAD_REQUEST, "Invalid signature format".to_string()),
            AppError::QueueSend => (StatusCode::INTERNAL_SERVER_ERROR, "Fault center queue error".to_string()),
            AppError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", e)),
            AppError::JsonParse(e) => (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", e)),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("IO error: {}", e)),
            AppError::SecretNotFound(name) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Secret not found: {}", name)),
        };

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

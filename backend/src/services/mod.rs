pub mod debug;
pub mod flights;

use actix_web::{web, HttpRequest};

use crate::error::ApiError;

/// JSON extractor settings shared by all API scopes. Malformed bodies are
/// answered in the same `{"error": ...}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req: &HttpRequest| ApiError::InvalidPayload(err.to_string()).into())
}

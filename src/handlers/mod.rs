pub mod retailers;
pub mod vendors;
pub mod leads;
pub mod deals;
pub mod proposals;
pub mod tickets;
pub mod profile;
pub mod messages;

use actix_web::{web, HttpRequest, HttpResponse, Route};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{ApiError, ApiResult};

pub const UPDATE_ID_REQUIRED: &str = "ID is required for update";
pub const DELETE_ID_REQUIRED: &str = "ID is required for deletion";

pub async fn main() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "service": "crm-backend" }))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for a resource: 405 with the methods it does accept.
pub fn method_not_allowed(allow: &'static str) -> Route {
    web::route().to(move |req: HttpRequest| async move {
        Err::<HttpResponse, _>(ApiError::MethodNotAllowed {
            method: req.method().to_string(),
            allow,
        })
    })
}

/// Malformed bodies become `400 {"error": ...}` like every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

/// Decodes a PUT/DELETE body without requiring a content type. An absent body
/// reads as `{}` so the handler reports the missing id.
pub fn id_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|err| ApiError::validation(format!("Json deserialize error: {}", err)))
}

use actix_web::{middleware::DefaultHeaders, web};
use log::debug;

use crate::errors::ServerError;

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS, PATCH";

/// Headers that let browser clients on any origin call the API.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", ALLOWED_METHODS))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Bodies are decoded as JSON whatever their `Content-Type` says. Malformed JSON is reported as a 400 with a JSON
/// error body, like every other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!("💻️ Could not deserialize request body. {err}");
            ServerError::CouldNotDeserializePayload(err.to_string()).into()
        })
}

/// Match ids are integers. Anything else in the id position is a 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        debug!("💻️ Could not parse request path. {err}");
        ServerError::InvalidRequestPath(err.to_string()).into()
    })
}

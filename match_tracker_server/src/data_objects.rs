use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The body returned by endpoints that acknowledge an action rather than return a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub message: String,
}

impl JsonResponse {
    pub fn new<S: Display>(message: S) -> Self {
        Self { message: message.to_string() }
    }
}

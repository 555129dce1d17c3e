//! ALB event and response types.
//!
//! Only the slice of the ALB target-group contract this Lambda actually
//! consumes is modeled here: the inbound `queryStringParameters` mapping and
//! the `{statusCode, headers, body}` response shape.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Inbound ALB target-group event.
///
/// All other event fields (path, method, headers, body, request context) are
/// ignored and left out of the model entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbRequest {
    /// Query parameters, absent or `null` when the URL carried none.
    ///
    /// `BTreeMap` keeps the forwarded payload deterministic.
    #[serde(default, rename = "queryStringParameters")]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
}

impl AlbRequest {
    /// The query-parameter mapping, normalized to empty when absent.
    ///
    /// No validation of keys or values is performed.
    pub fn query_parameters(&self) -> BTreeMap<String, String> {
        self.query_string_parameters.clone().unwrap_or_default()
    }
}

/// Outbound ALB target-group response.
#[derive(Debug, Clone, Serialize)]
pub struct AlbResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON text of shape `{"message": <string>}`.
    pub body: String,
}

impl AlbResponse {
    /// Build a JSON response carrying a single `message` field.
    pub fn json(status_code: u16, message: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        AlbResponse {
            status_code,
            headers,
            body: serde_json::json!({ "message": message }).to_string(),
        }
    }
}

//! REST endpoints of the document.

use serde_json::Value;
use std::fmt;

use crate::api::name_translator::last_segment;

/// One path of the document
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoint {
    path: String,
    name: String,
    summary: String,
    payload: Value,
}

impl ApiEndpoint {
    /// `name` is the translated display name; the summary is the raw last
    /// segment of `path`
    pub fn new(path: &str, name: String, payload: Value) -> Self {
        Self {
            path: path.to_string(),
            name,
            summary: last_segment(path).to_string(),
            payload,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The path item (operations) exactly as the document gave it
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

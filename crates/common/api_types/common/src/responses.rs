use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Envelope for every explorer HTTP payload.
///
/// # Example
/// {
///  "data": { "state": "table", "table": {...}, "more": null }
/// }
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

use explorer_api_types_common::id::ObjectID;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrowError {
    #[error("Object response carries an error: {0}")]
    ResponseError(String),

    #[error("Object response has no data")]
    MissingData,

    #[error("Object {0} was fetched without content")]
    MissingContent(ObjectID),

    #[error("Object {0} is a package, expected a Move object")]
    NotMoveObject(ObjectID),

    #[error("Failed to decode fields of {type_}: {source}")]
    Fields {
        type_: String,
        source: serde_json::Error,
    },
}

/// Result of reading a single object.
///
/// # Example
/// {
///   "data": { "objectId": "0x5", "version": "1", "digest": "...", "content": {...} }
/// }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ObjectData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ObjectResponseError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: ObjectID,
    #[serde(with = "serde_utils::quoted_u64")]
    pub version: u64,
    pub digest: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ParsedData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectResponseError {
    pub code: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Parsed object content, tagged by `dataType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum ParsedData {
    MoveObject(MoveObject),
    Package(MovePackage),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveObject {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub has_public_transfer: bool,
    pub fields: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovePackage {
    pub disassembled: Map<String, Value>,
}

impl ObjectResponse {
    pub fn from_data(data: ObjectData) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Narrow the response down to its Move object content.
    pub fn as_move_object(&self) -> Result<&MoveObject, NarrowError> {
        if let Some(error) = &self.error {
            return Err(NarrowError::ResponseError(error.code.clone()));
        }
        let data = self.data.as_ref().ok_or(NarrowError::MissingData)?;
        match &data.content {
            Some(ParsedData::MoveObject(move_object)) => Ok(move_object),
            Some(ParsedData::Package(_)) => Err(NarrowError::NotMoveObject(data.object_id)),
            None => Err(NarrowError::MissingContent(data.object_id)),
        }
    }
}

impl MoveObject {
    pub fn decode_fields<T: DeserializeOwned>(&self) -> Result<T, NarrowError> {
        T::deserialize(&self.fields).map_err(|source| NarrowError::Fields {
            type_: self.type_.clone(),
            source,
        })
    }
}

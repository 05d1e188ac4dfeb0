use std::string::FromUtf8Error;

use explorer_api_types_object::object::NarrowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Validator name is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Validator name is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to decode validator name: {0}")]
    Decode(#[from] DecodeError),

    #[error("Validator set has an unexpected shape: {0}")]
    Shape(#[from] NarrowError),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed with status code: {status_code}")]
    RequestFailed { status_code: reqwest::StatusCode },

    #[error("Node returned JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Invalid response format")]
    InvalidResponse,

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

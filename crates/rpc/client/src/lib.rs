pub mod error;
pub mod http_client;
pub mod json_rpc;
pub mod object_client;
pub mod source;

pub mod error;
pub mod id;
pub mod responses;

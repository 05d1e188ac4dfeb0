pub mod cache;
pub mod error;
pub mod projection;
pub mod rank;
pub mod stake;
pub mod surface;
pub mod table;

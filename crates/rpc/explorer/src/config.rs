use std::{
    net::{IpAddr, SocketAddr},
    num::NonZeroUsize,
};

use explorer_validator_table::cache::DEFAULT_TABLE_CACHE_SIZE;

#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub http_socket_address: SocketAddr,
    pub http_allow_origin: bool,
    /// Built tables kept per validator set and limit.
    pub table_cache_size: NonZeroUsize,
}

impl RpcServerConfig {
    /// Creates a new instance from CLI arguments
    pub fn new(http_address: IpAddr, http_port: u16, http_allow_origin: bool) -> Self {
        Self {
            http_socket_address: SocketAddr::new(http_address, http_port),
            http_allow_origin,
            table_cache_size: DEFAULT_TABLE_CACHE_SIZE,
        }
    }

    pub fn with_table_cache_size(mut self, table_cache_size: NonZeroUsize) -> Self {
        self.table_cache_size = table_cache_size;
        self
    }
}

use std::{net::IpAddr, num::NonZeroUsize, time::Duration};

use clap::Parser;
use explorer_api_types_common::id::ObjectID;
use explorer_validator_table::cache::DEFAULT_TABLE_CACHE_SIZE;
use url::Url;

use crate::cli::{
    constants::{
        DEFAULT_HTTP_ADDRESS, DEFAULT_HTTP_ALLOW_ORIGIN, DEFAULT_HTTP_PORT, DEFAULT_OBJECT_ID,
        DEFAULT_REQUEST_TIMEOUT, DEFAULT_RPC_ENDPOINT,
    },
    validators::duration_parser,
};

#[derive(Debug, Parser)]
pub struct ServeConfig {
    #[arg(long, env = "EXPLORER_RPC_ENDPOINT", help = "Set HTTP url of the full node JSON-RPC endpoint", default_value = DEFAULT_RPC_ENDPOINT)]
    pub rpc_endpoint: Url,

    #[arg(long, help = "Set HTTP request timeout for full node calls", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "ID of the system state object", default_value = DEFAULT_OBJECT_ID)]
    pub object_id: ObjectID,

    #[arg(long, help = "Set HTTP address", default_value_t = DEFAULT_HTTP_ADDRESS)]
    pub http_address: IpAddr,

    #[arg(long, help = "Set HTTP Port", default_value_t = DEFAULT_HTTP_PORT)]
    pub http_port: u16,

    #[arg(long, default_value_t = DEFAULT_HTTP_ALLOW_ORIGIN)]
    pub http_allow_origin: bool,

    #[arg(long, help = "Number of built validator tables to keep in memory", default_value_t = DEFAULT_TABLE_CACHE_SIZE)]
    pub table_cache_size: NonZeroUsize,
}

use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_HTTP_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_HTTP_ALLOW_ORIGIN: bool = false;
pub const DEFAULT_HTTP_PORT: u16 = 5052;
pub const DEFAULT_OBJECT_ID: &str = "0x5";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "60";
pub const DEFAULT_RPC_ENDPOINT: &str = "https://fullnode.mainnet.sui.io:443";
pub const DEFAULT_VERBOSITY: &str = "3";

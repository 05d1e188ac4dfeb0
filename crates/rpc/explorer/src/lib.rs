pub mod config;
pub mod handlers;
pub mod routes;
pub mod server;

use std::sync::Arc;

use config::RpcServerConfig;
use explorer_api_types_common::id::ObjectID;
use explorer_rpc_client::source::ObjectSource;
use explorer_validator_table::cache::TableCache;
use server::RpcServerBuilder;

use crate::{handlers::validators::ExplorerState, routes::register_routers};

/// Start the explorer HTTP API.
pub async fn start_server(
    server_config: RpcServerConfig,
    source: Arc<dyn ObjectSource>,
    object_id: ObjectID,
) -> std::io::Result<()> {
    let state = ExplorerState {
        source,
        object_id,
        cache: Arc::new(TableCache::new(server_config.table_cache_size)),
    };

    RpcServerBuilder::new(server_config)
        .with_data(state)
        .configure(register_routers)
        .start()
        .await
}

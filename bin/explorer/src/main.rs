use std::sync::Arc;

use clap::Parser;
use explorer::cli::{
    Cli, Commands,
    serve::ServeConfig,
    validators::{ValidatorsConfig, render_text},
};
use explorer_rpc::{config::RpcServerConfig, start_server};
use explorer_rpc_client::{object_client::ObjectApiClient, source::fetch_snapshot};
use explorer_validator_table::surface::TopValidators;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.verbosity.directive()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validators(config) => run_validators(config).await,
        Commands::Serve(config) => run_serve(config).await,
    }
}

async fn run_validators(config: ValidatorsConfig) -> anyhow::Result<()> {
    let client = ObjectApiClient::new(config.rpc_endpoint, config.request_timeout)?;
    info!(
        "Fetching object {} from {}",
        config.object_id.to_short_string(),
        client.endpoint()
    );

    let snapshot = fetch_snapshot(&client, config.object_id).await;
    let surface = TopValidators::new(config.limit).render(&snapshot)?;
    println!("{}", render_text(&surface));

    Ok(())
}

async fn run_serve(config: ServeConfig) -> anyhow::Result<()> {
    let client = ObjectApiClient::new(config.rpc_endpoint, config.request_timeout)?;
    info!("Reading validators from {}", client.endpoint());

    let server_config = RpcServerConfig::new(
        config.http_address,
        config.http_port,
        config.http_allow_origin,
    )
    .with_table_cache_size(config.table_cache_size);
    start_server(server_config, Arc::new(client), config.object_id).await?;

    Ok(())
}

use std::{io::Result, net::TcpListener, sync::Arc};

use actix_web::{
    App, HttpServer,
    http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
    middleware::{Condition, DefaultHeaders, Logger},
    web::{Data, ServiceConfig},
};
use tracing::info;

use crate::config::RpcServerConfig;

/// A type alias for a function that configures the actix-web ServiceConfig.
type Configurator = dyn Fn(&mut ServiceConfig) + Send + Sync;

/// A builder for configuring and starting the explorer HTTP server.
pub struct RpcServerBuilder {
    config: RpcServerConfig,
    configurators: Vec<Arc<Configurator>>,
}

impl RpcServerBuilder {
    pub fn new(config: RpcServerConfig) -> Self {
        Self {
            config,
            configurators: Vec::new(),
        }
    }

    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.configurators.push(Arc::new(f));
        self
    }

    pub fn with_data<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.configurators
            .push(Arc::new(move |config: &mut ServiceConfig| {
                config.app_data(Data::new(value.clone()));
            }));
        self
    }

    /// Bind the configured socket address and serve until shutdown.
    pub async fn start(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.http_socket_address)?;
        self.run(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn run(self, listener: TcpListener) -> Result<()> {
        let configurators = self.configurators;
        let configure_all = move |config: &mut ServiceConfig| {
            for configurator in &configurators {
                configurator(config);
            }
        };
        let allow_origin = self.config.http_allow_origin;

        info!(
            "Starting explorer HTTP server on {}, allow origin: {allow_origin}",
            listener.local_addr()?
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .wrap(Condition::new(
                    allow_origin,
                    DefaultHeaders::new().add((ACCESS_CONTROL_ALLOW_ORIGIN, "*")),
                ))
                .configure(configure_all.clone())
        })
        .listen(listener)?
        .run()
        .await
    }
}

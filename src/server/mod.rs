//! Server assembly: route registration API and the accept loop.

pub mod listener;
pub mod router;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::server::router::{Router, Service};

/// One server instance: a route table plus the listen address.
///
/// Routes and the static root are registered up front; `run` (or `serve`)
/// then consumes the server and the router stays immutable for the rest of
/// the process lifetime.
pub struct Server {
    config: Config,
    router: Router,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            router: Router::new(),
        }
    }

    /// Registers a GET handler under the `/app` prefix.
    pub fn get(&mut self, path: &str, service: impl Service + 'static) {
        self.router.get(path, service);
    }

    /// Registers a POST handler under the `/app` prefix.
    pub fn post(&mut self, path: &str, service: impl Service + 'static) {
        self.router.post(path, service);
    }

    /// Sets the directory static files are served from.
    pub fn static_files(&mut self, dir: impl Into<PathBuf>) {
        self.router.static_files(dir);
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        self.serve(listener).await
    }

    /// Serves on an already-bound listener. Useful when the caller binds
    /// port 0 and needs the actual address before the loop starts.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        listener::run(listener, Arc::new(self.router)).await
    }
}

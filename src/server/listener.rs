use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::http::connection::Connection;
use crate::server::router::Router;

/// Accepts connections one at a time; each request is fully served before
/// the next accept. A failed connection is logged and the loop continues,
/// so the listener never dies because of one bad client.
pub async fn run(listener: TcpListener, router: Arc<Router>) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                // Transient accept failures (e.g. a client aborting while
                // queued) must not take the listener down.
                error!("Accept error: {}", e);
                continue;
            }
        };

        let mut conn = Connection::new(socket, Arc::clone(&router));
        if let Err(e) = conn.run().await {
            error!("Connection error from {}: {}", peer, e);
        }
    }
}

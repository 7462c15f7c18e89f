//! TCP acceptor: binds the listening socket and spawns one session worker
//! per accepted connection.

use super::context::ServerContext;
use super::worker::SessionWorker;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Pause after a failed accept before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// How long shutdown waits for workers to finish closing.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A bound server, ready to accept connections.
pub struct SessionServer {
    listener: TcpListener,
    ctx: ServerContext,
}

impl SessionServer {
    /// Bind the listening socket. Failure here is fatal for the process.
    pub async fn bind(addr: &str, ctx: ServerContext) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        Ok(Self { listener, ctx })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until `shutdown` is cancelled, then terminate
    /// every live session and wait briefly for the workers to finish.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), ServerError> {
        let mut workers = JoinSet::new();
        info!("Listening on {}", self.local_addr()?);

        loop {
            while workers.try_join_next().is_some() {}

            let accepted = tokio::select! {
                _ = shutdown.cancelled() => break,
                accepted = self.listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        debug!("set_nodelay failed for {}: {}", peer, e);
                    }
                    let worker = SessionWorker::new(self.ctx.clone(), stream, peer);
                    workers.spawn(worker.run());
                }
                Err(e) => {
                    warn!("Accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                }
            }
        }

        let closed = self.ctx.registry.terminate_all();
        info!("Shutting down, {} session(s) terminated", closed);

        let drain = async { while workers.join_next().await.is_some() {} };
        if tokio::time::timeout(SHUTDOWN_GRACE, drain).await.is_err() {
            warn!("Workers still running after {:?}, aborting", SHUTDOWN_GRACE);
            workers.abort_all();
        }
        Ok(())
    }
}

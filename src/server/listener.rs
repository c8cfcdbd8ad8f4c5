use anyhow::Context;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::session::SessionManager;

/// A bound listener plus the state shared with every connection handler.
pub struct Server {
    listener: TcpListener,
    sessions: Arc<SessionManager>,
    max_request_bytes: usize,
}

impl Server {
    /// Binds the configured address with `SO_REUSEADDR` and the configured
    /// backlog. Failure here is fatal for the process.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let listen_addr = &cfg.server.listen_addr;

        let addr = tokio::net::lookup_host(listen_addr)
            .await
            .with_context(|| format!("cannot resolve listen address {}", listen_addr))?
            .next()
            .with_context(|| format!("listen address {} resolved to nothing", listen_addr))?;

        let listener = listen(addr, cfg.server.backlog)
            .with_context(|| format!("cannot listen on {}", addr))?;

        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            sessions: Arc::new(SessionManager::new(&cfg.session)),
            max_request_bytes: cfg.server.max_request_bytes,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until `shutdown` resolves.
    ///
    /// Every connection runs in its own task and the loop never waits for
    /// one. Once `shutdown` fires the listening socket is closed, then the
    /// handlers still in flight are awaited to completion.
    pub async fn run_until(self, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
        let Server {
            listener,
            sessions,
            max_request_bytes,
        } = self;

        let mut handlers = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,

                accepted = listener.accept() => {
                    let (socket, peer) = match accepted {
                        Ok(conn) => conn,
                        Err(e) => {
                            warn!("Failed to accept connection: {}", e);
                            continue;
                        }
                    };
                    info!("Accepted connection from {}", peer);

                    let sessions = Arc::clone(&sessions);
                    handlers.spawn(async move {
                        let mut conn = Connection::new(socket, peer, sessions, max_request_bytes);
                        if let Err(e) = conn.run().await {
                            error!("Connection error from {}: {}", peer, e);
                        }
                    });
                }

                Some(joined) = handlers.join_next(), if !handlers.is_empty() => {
                    if let Err(e) = joined {
                        error!("Connection task failed: {}", e);
                    }
                }
            }
        }

        drop(listener);
        info!(in_flight = handlers.len(), "Listener closed, letting open connections finish");

        while let Some(joined) = handlers.join_next().await {
            if let Err(e) = joined {
                error!("Connection task failed: {}", e);
            }
        }

        Ok(())
    }

    /// Accepts connections forever.
    pub async fn run(self) -> anyhow::Result<()> {
        self.run_until(std::future::pending()).await
    }
}

fn listen(addr: SocketAddr, backlog: u32) -> std::io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };

    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    socket.listen(backlog)
}

use std::{sync::Arc, time::Duration};

use statik_cache::TtlCache;
use statik_config::StatikConfig;
use tokio::{
    net::TcpListener,
    sync::Semaphore,
    time::timeout,
};
use tracing::{debug, error, info};

use crate::worker::handle_connection;

/// Owns the listening socket, the worker-pool semaphore and the shared
/// cache, and hands each accepted connection to exactly one worker task.
pub struct Master {
    cfg: Arc<StatikConfig>,
    cache: Arc<TtlCache>,
}

impl Master {
    /// Build the master and the process-wide cache it injects into every
    /// worker. The cache lives as long as the master does.
    pub fn new(cfg: StatikConfig) -> Self {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(cfg.cache.ttl_secs)));
        Self {
            cfg: Arc::new(cfg),
            cache,
        }
    }

    /// Bind the listening endpoint. Failure here is fatal to startup.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        bind_listener(self.cfg.server.listen()).await
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Accept loop. Per-accept failures are logged and the loop continues;
    /// only bind failure (in [`bind`]) aborts the service.
    ///
    /// [`bind`]: Master::bind
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let pool_size = self.cfg.global.worker_pool_size;
        let semaphore = Arc::new(Semaphore::new(pool_size));
        let accept_timeout = Duration::from_secs(self.cfg.server.accept_timeout_secs);

        info!(
            target: "statik::master",
            pool_size,
            accept_timeout_secs = self.cfg.server.accept_timeout_secs,
            root = %self.cfg.server.root,
            "Worker pool initialized; entering accept loop"
        );

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            let accepted = tokio::select! {
                _ = &mut shutdown => {
                    info!(target: "statik::master", "Shutdown signal received; leaving accept loop");
                    break;
                }
                res = timeout(accept_timeout, listener.accept()) => res,
            };

            let (stream, client_addr) = match accepted {
                // No connection within the accept window. Loop again so
                // the shutdown branch above gets a periodic chance to run
                // even under zero traffic.
                Err(_elapsed) => continue,
                Ok(Err(e)) => {
                    error!(
                        target: "statik::master",
                        error = ?e,
                        "Failed to accept connection"
                    );
                    continue;
                }
                Ok(Ok(pair)) => pair,
            };

            // When every worker is busy this blocks the dispatcher until a
            // permit frees up: bounded back-pressure rather than the
            // unbounded submission queue of a bare executor.
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(p) => p,
                Err(e) => {
                    error!(
                        target: "statik::master",
                        error = ?e,
                        "Failed to acquire worker permit"
                    );
                    continue;
                }
            };

            debug!(
                target: "statik::master",
                %client_addr,
                available_permits = semaphore.available_permits(),
                "Connection accepted; dispatching to worker"
            );

            let cache = Arc::clone(&self.cache);
            let cfg = Arc::clone(&self.cfg);

            tokio::spawn(async move {
                let _permit = permit;
                if let Err(e) = handle_connection(stream, client_addr, cache, cfg).await {
                    error!(
                        target: "statik::worker",
                        %client_addr,
                        error = ?e,
                        "Error while handling connection"
                    );
                }
            });
        }

        // Graceful drain: re-acquiring the whole pool waits for every
        // in-flight handler to release its permit.
        let _ = semaphore.acquire_many(pool_size as u32).await?;
        info!(target: "statik::master", "All workers drained; master exiting");

        Ok(())
    }
}

pub(crate) async fn bind_listener(listen_addr: &str) -> anyhow::Result<TcpListener> {
    info!(
        target: "statik::master",
        listen = %listen_addr,
        "Binding listener"
    );

    match TcpListener::bind(listen_addr).await {
        Ok(listener) => {
            info!(
                target: "statik::master",
                listen = %listen_addr,
                "Bind() successful"
            );
            Ok(listener)
        }
        Err(e) => {
            error!(
                target: "statik::master",
                listen = %listen_addr,
                error = ?e,
                "Failed to bind listener"
            );
            Err(e.into())
        }
    }
}

//! # Timelock Runtime
//!
//! Runs the draw timelock and the timelock trigger in one process.
//!
//! ## Startup Sequence
//!
//! 1. Install the log subscriber (`RUST_LOG`, default `info`)
//! 2. Load configuration (`PT_CONFIG` file, then environment)
//! 3. Deploy components against the system clock
//! 4. Start the event log handler
//! 5. Wait for Ctrl+C, then shut down

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shared_types::SystemClock;
use timelock_runtime::{load_config, EventLogHandler, TimelockRuntime};

/// Process wrapper owning the components and the shutdown signal.
struct TimelockNode {
    runtime: Arc<TimelockRuntime>,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
}

impl TimelockNode {
    fn new(runtime: TimelockRuntime) -> Self {
        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
        Self {
            runtime: Arc::new(runtime),
            shutdown_tx,
            shutdown_rx,
        }
    }

    fn start(&self, handler: EventLogHandler) {
        info!("===========================================");
        info!("  Timelock Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let mut shutdown = self.shutdown_rx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = handler.run() => {}
                _ = shutdown.changed() => {
                    info!("Event log handler received shutdown signal");
                }
            }
        });

        let config = &self.runtime.config;
        info!("Draw timelock: {:?}", config.timelock_address);
        info!("Timelock trigger: {:?}", config.trigger_address);
        info!("Owner: {:?}", config.owner);
        info!(
            "Timelock duration: {}s",
            config.trigger.timelock_duration_secs
        );
    }

    fn shutdown(&self) {
        info!("Initiating shutdown...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
        info!("Shutdown complete");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config().context("Failed to load configuration")?;
    let mut runtime = TimelockRuntime::build(config, Arc::new(SystemClock)).await?;
    let handler = runtime
        .take_event_log()
        .context("Event log handler already taken")?;

    let node = TimelockNode::new(runtime);
    node.start(handler);

    info!("Runtime is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    node.shutdown();
    Ok(())
}

use crate::application::client::DashboardClient;
use crate::application::worker::PredictionWorker;
use crate::config::Config;
use crate::domain::ports::{MarketDataSource, Predictor};
use crate::infrastructure::ServiceFactory;
use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Depth of the UI -> worker command queue
const COMMAND_BUFFER: usize = 32;

/// Build the configured services and start the background runtime.
pub fn start(config: &Config, log_rx: Receiver<String>) -> Result<DashboardClient> {
    let (source, predictor) =
        ServiceFactory::create_services(config).context("Failed to build prediction services")?;
    start_with_services(source, predictor, log_rx)
}

/// Start a dedicated thread running a multi-threaded tokio runtime that
/// serves dashboard commands with the given services.
pub fn start_with_services(
    source: Arc<dyn MarketDataSource>,
    predictor: Arc<dyn Predictor>,
    log_rx: Receiver<String>,
) -> Result<DashboardClient> {
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
    let (event_tx, event_rx) = crossbeam_channel::unbounded();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    let worker = PredictionWorker::new(source, predictor, event_tx);

    std::thread::Builder::new()
        .name("predictor-runtime".to_string())
        .spawn(move || {
            info!("Background Runtime Started.");
            rt.block_on(worker.run(cmd_rx));
        })
        .context("Failed to spawn runtime thread")?;

    Ok(DashboardClient::new(cmd_tx, event_rx, log_rx))
}

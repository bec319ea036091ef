use crate::domain::errors::PredictorError;
use crate::domain::features::{FeatureVector, MarketSnapshot};
use crate::domain::ports::{MarketDataSource, Predictor};
use crossbeam_channel::Sender;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Requests issued by the UI thread
#[derive(Debug, Clone)]
pub enum DashboardCommand {
    LoadSnapshot,
    Predict(FeatureVector),
}

/// Results delivered back to the UI thread
#[derive(Debug)]
pub enum DashboardEvent {
    SnapshotLoaded(Result<MarketSnapshot, PredictorError>),
    PredictionReady(Result<f64, PredictorError>),
    Log(String),
}

/// Background task that performs all network calls for the dashboard.
///
/// Each command is served on its own task, so concurrent predictions are
/// neither queued nor de-duplicated.
pub struct PredictionWorker {
    source: Arc<dyn MarketDataSource>,
    predictor: Arc<dyn Predictor>,
    event_tx: Sender<DashboardEvent>,
}

impl PredictionWorker {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        predictor: Arc<dyn Predictor>,
        event_tx: Sender<DashboardEvent>,
    ) -> Self {
        Self {
            source,
            predictor,
            event_tx,
        }
    }

    pub async fn run(self, mut cmd_rx: mpsc::Receiver<DashboardCommand>) {
        info!("PredictionWorker: started");

        while let Some(cmd) = cmd_rx.recv().await {
            debug!("PredictionWorker: received {:?}", cmd);
            match cmd {
                DashboardCommand::LoadSnapshot => {
                    let source = self.source.clone();
                    let tx = self.event_tx.clone();
                    tokio::spawn(async move {
                        let result = source.current_snapshot().await;
                        if tx.send(DashboardEvent::SnapshotLoaded(result)).is_err() {
                            warn!("PredictionWorker: UI gone, dropping snapshot");
                        }
                    });
                }
                DashboardCommand::Predict(features) => {
                    let predictor = self.predictor.clone();
                    let tx = self.event_tx.clone();
                    tokio::spawn(async move {
                        let result = predictor.predict(&features).await;
                        if tx.send(DashboardEvent::PredictionReady(result)).is_err() {
                            warn!("PredictionWorker: UI gone, dropping prediction");
                        }
                    });
                }
            }
        }

        info!("PredictionWorker: command channel closed, stopping");
    }
}

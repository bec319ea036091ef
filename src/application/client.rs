use crate::application::worker::{DashboardCommand, DashboardEvent};
use crate::domain::features::FeatureVector;
use anyhow::Result;
use crossbeam_channel::Receiver;
use tokio::sync::mpsc;

/// A client interface for talking to the background prediction worker.
/// Abstracts away channel management and provides a clean API for the dashboard.
pub struct DashboardClient {
    cmd_tx: mpsc::Sender<DashboardCommand>,
    event_rx: Receiver<DashboardEvent>,
    log_rx: Receiver<String>,
}

impl DashboardClient {
    pub fn new(
        cmd_tx: mpsc::Sender<DashboardCommand>,
        event_rx: Receiver<DashboardEvent>,
        log_rx: Receiver<String>,
    ) -> Self {
        Self {
            cmd_tx,
            event_rx,
            log_rx,
        }
    }

    /// Poll for the next available event from any channel.
    /// This is a non-blocking call that checks worker results before logs.
    pub fn poll_next(&mut self) -> Option<DashboardEvent> {
        if let Ok(event) = self.event_rx.try_recv() {
            return Some(event);
        }

        if let Ok(msg) = self.log_rx.try_recv() {
            return Some(DashboardEvent::Log(msg));
        }

        None
    }

    // --- Command Methods ---

    pub fn request_snapshot(&self) -> Result<()> {
        self.cmd_tx
            .try_send(DashboardCommand::LoadSnapshot)
            .map_err(|e| anyhow::anyhow!("Failed to request market snapshot: {}", e))
    }

    pub fn request_prediction(&self, features: FeatureVector) -> Result<()> {
        self.cmd_tx
            .try_send(DashboardCommand::Predict(features))
            .map_err(|e| anyhow::anyhow!("Failed to request prediction: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_prefers_worker_events() {
        let (cmd_tx, _cmd_rx) = mpsc::channel(4);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (log_tx, log_rx) = crossbeam_channel::unbounded();
        let mut client = DashboardClient::new(cmd_tx, event_rx, log_rx);

        log_tx.send("INFO booting".to_string()).unwrap();
        event_tx
            .send(DashboardEvent::PredictionReady(Ok(1.0)))
            .unwrap();

        assert!(matches!(
            client.poll_next(),
            Some(DashboardEvent::PredictionReady(Ok(_)))
        ));
        assert!(matches!(client.poll_next(), Some(DashboardEvent::Log(_))));
        assert!(client.poll_next().is_none());
    }

    #[test]
    fn test_commands_reach_worker_channel() {
        let (cmd_tx, mut cmd_rx) = mpsc::channel(4);
        let (_event_tx, event_rx) = crossbeam_channel::unbounded();
        let (_log_tx, log_rx) = crossbeam_channel::unbounded();
        let client = DashboardClient::new(cmd_tx, event_rx, log_rx);

        client.request_snapshot().unwrap();
        client.request_prediction(FeatureVector::default()).unwrap();

        assert!(matches!(cmd_rx.try_recv(), Ok(DashboardCommand::LoadSnapshot)));
        assert!(matches!(cmd_rx.try_recv(), Ok(DashboardCommand::Predict(_))));
    }

    #[test]
    fn test_closed_worker_reports_error() {
        let (cmd_tx, cmd_rx) = mpsc::channel(1);
        drop(cmd_rx);
        let (_event_tx, event_rx) = crossbeam_channel::unbounded();
        let (_log_tx, log_rx) = crossbeam_channel::unbounded();
        let client = DashboardClient::new(cmd_tx, event_rx, log_rx);

        let err = client.request_snapshot().unwrap_err();
        assert!(err.to_string().contains("market snapshot"));
    }
}

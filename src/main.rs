use btcsim::application::dashboard_app::DashboardApp;
use btcsim::application::system;
use btcsim::config::Config;
use btcsim::infrastructure::observability;
use btcsim::interfaces::design_system::DesignSystem;

use tracing::info;
use tracing_subscriber::prelude::*;

// Forwards formatted log lines to the dashboard's log panel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        let line = line.trim_end();
        if !line.is_empty() {
            // Dropped silently once the UI is gone
            let _ = self.sender.try_send(line.to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env
    dotenvy::dotenv().ok();

    // 1. Log pipe for the dashboard's log panel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(observability::env_filter_from_env())
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Starting BTC/USD scenario simulator...");

    // 3. Config + background prediction runtime
    let config = Config::from_env()?;
    info!(
        "Market data: {:?}, predictor: {}, failure policy: {:?}",
        config.dashboard.market_data_source,
        config.predictor.base_url,
        config.dashboard.predict_failure_policy
    );

    let client = system::start(&config, log_rx)?;
    let app = DashboardApp::new(client, &config);

    // 4. Launch UI
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("BTC/USD Simulator"),
        ..Default::default()
    };

    eframe::run_native(
        "BTC/USD Simulator",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    Ok(())
}

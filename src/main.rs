use std::sync::Arc;

use anyhow::{anyhow, Result};
use eframe::egui::ViewportBuilder;
use tracing::info;

use hn_search::{logging, HnSearchClient, SearchApp, SearchConfig};

fn main() -> Result<()> {
    let config = SearchConfig::load()?;
    logging::init(&config.log_level);
    info!(api_base = %config.api_base, query = %config.default_query, "starting HN Search");

    let client = Arc::new(HnSearchClient::new(&config)?);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("HN Search"),
        ..Default::default()
    };

    eframe::run_native(
        "HN Search",
        options,
        Box::new(move |cc| {
            let mut app = SearchApp::new(&config, client)?.with_repaint(cc.egui_ctx.clone());
            app.initialize();
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}

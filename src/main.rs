//! medalwatch - athlete results widget
//!
//! Polls the configured feed every minute and keeps the widget file up to
//! date.

use anyhow::Context;
use medalwatch::api::HttpSource;
use medalwatch::ui::FileMount;
use medalwatch::{App, Config, Ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load_or_default().context("loading configuration")?;

    // Initialize logging
    let _log_guard = medalwatch::logging::init(&config.logging)?;

    let source = HttpSource::new(&config.source).context("creating feed client")?;
    let mount = FileMount::new(&config.output);
    tracing::info!(
        endpoint = %config.source.endpoint,
        output = %mount.path().display(),
        "Starting medalwatch"
    );

    // Run the application
    let mut app = App::new(source, mount, Ui::from_config(&config.output));
    app.run().await?;

    Ok(())
}

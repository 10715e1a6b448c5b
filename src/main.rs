//! `MeterBuddy` binary entry point.

use std::sync::Arc;
use std::time::Duration;

use meter_buddy::errors::Result;
use meter_buddy::{config, core, tui};

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible). The TUI owns the terminal,
    //    so log output goes to a file instead of stderr.
    let log_file = std::fs::File::create("meter-buddy.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration (optional config.toml)
    let app_config = config::app::load_default_config()
        .inspect_err(|e| error!("Failed to load application configuration: {}", e))?;
    let delay = Duration::from_millis(app_config.generation.delay_ms);

    // 4. Initialize the database and settings table
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Load the persisted theme preference (defaults to light)
    let theme = core::theme::load_theme(&db).await?;
    info!("Application started. Ready. Theme: {}", theme.as_str());

    // 6. Run the widget
    tui::App::new(db, theme, delay).run().await?;

    info!("Exited cleanly.");
    Ok(())
}

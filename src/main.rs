//! Vivid UI Gallery - Main Entry Point
//!
//! Showcase of every component in the library.

use vivid_ui::app::application::run_gallery;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Vivid UI gallery...");

    // Run the GPUI application
    run_gallery()
}

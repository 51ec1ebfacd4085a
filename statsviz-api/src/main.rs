mod config;
mod error;
mod form;
mod render;
mod routes;

use anyhow::{Context as _, Result};
use clap::Parser;
use config::Config;
use log::{error, info};
use render::ChartRenderer;
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let renderer = ChartRenderer::new(&config.template);
    info!(
        "Serving {} from {}, chart template {}",
        routes::STATIC_PREFIX,
        config.static_dir.display(),
        renderer.template_path().display()
    );
    let rtr = routes::router(renderer, &config.static_dir);

    let listener = TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to listen on {}", config.addr))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, rtr)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Exiting..."),
        Err(e) => {
            error!("Failed to listen for ctrl-c, running until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}

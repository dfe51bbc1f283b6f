use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing::{info, warn};

use cpu_exporter::api;
use cpu_exporter::config::Config;
use cpu_exporter::metrics::{Metrics, MetricsHandle};
use cpu_exporter::sampler::{CpuSampler, SysinfoProbe};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration; errors are reported
    // once logging is up.
    let dotenv_result = dotenvy::dotenv();

    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(config.logging.level.clone()))
        .init();

    if let Err(e) = dotenv_result {
        if !e.not_found() {
            warn!("Error loading .env file: {}", e);
        }
    }

    let metrics =
        Arc::new(Metrics::new().context("Failed to create metrics registry")?);

    // The sampler is detached; it runs until the process exits.
    let sampler = CpuSampler::new(Box::new(SysinfoProbe::new()), metrics.clone());
    sampler.spawn();

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    let handle: Arc<dyn MetricsHandle> = metrics;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(handle.clone()))
            .configure(api::routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}

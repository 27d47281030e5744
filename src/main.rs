use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
mod api;
use crate::api::{
    job::{handlers::job_config, JobService},
    log_sink::TracingSink,
    state::AppState,
};
mod cli;
mod config;
mod logging;
mod shutdown;
use crate::cli::Cli;
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment, then apply command line overrides
    let config = config::Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?
        .with_overrides(&cli);

    std::fs::create_dir_all(&config.log_dir)?;
    logging::init(&config);

    info!("App started");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Log file: {}", config.log_dir.join(&config.log_file).display());

    let state = web::Data::new(AppState::new(
        JobService::default(),
        Arc::new(TracingSink),
        config.max_payload_size,
    ));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(job_config)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    info!("Server listening on {}:{}", config.host, config.port);

    // Get server handle for graceful shutdown
    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task)
        .wait_for_shutdown()
        .await
}

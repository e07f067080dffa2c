use anyhow::{Context, Result};
use faculty_portal::core::config::Config;
use faculty_portal::core::console::run_console;
use faculty_portal::core::portal::Portal;
use faculty_portal::core::tracing_init::init_tracing;
use faculty_portal::notify::sink::JsonLinesSink;
use std::env;
use std::path::PathBuf;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{error, info};

fn main() -> Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);

    // Load and validate configuration
    let config = Config::load(config_path.as_deref()).context(format!(
        "Failed to load configuration from '{}'",
        config_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string())
    ))?;

    init_tracing(&config.logging);

    // Intents are handled one at a time; no worker threads needed
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: Option<PathBuf>) -> Result<()> {
    info!(
        config_path = ?config_path,
        faculty_id = %config.portal.faculty_id,
        subjects = config.subjects.len(),
        students = config.students.len(),
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Faculty portal starting"
    );

    let sink = JsonLinesSink::new(std::io::stdout(), config.notifications.display_ms);
    let mut portal = Portal::new(config, Box::new(sink));

    let input = BufReader::new(tokio::io::stdin());
    let mut replies = std::io::stdout();

    tokio::select! {
        result = run_console(&mut portal, input, &mut replies) => {
            if let Err(e) = result {
                error!(error = %e, "Console loop failed");
                return Err(e);
            }
        }
        _ = shutdown_signal() => {}
    }

    let snapshot = portal.metrics_snapshot();
    info!(
        total_intents = snapshot.total_intents,
        accepted_intents = snapshot.accepted_intents,
        rejected_intents = snapshot.rejected_intents,
        leave_requests = snapshot.leave_requests,
        materials = snapshot.materials,
        "Shutting down"
    );

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

use std::process::ExitCode;
use std::time::Duration;

use axum_server::Handle;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use cms::config::Config;
use cms::database::Database;

const CONFIG_PATH: &str = "cms.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::load(CONFIG_PATH);

    // Begin logging. Statement logging from the store is emitted at debug level.
    let level = match &config {
        Ok(c) if c.database.log_queries => Level::DEBUG,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logger: {e}");
    }

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let addr = match config.server.socket_addr() {
        Ok(a) => a,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Open the store, aborting start-up if an error occurs
    let db = match Database::connect(&config.database.url, config.database.log_queries).await {
        Ok(db) => db,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Database initialized");

    let app = cms::app(db.clone());

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    info!("Listening on {addr}");
    let served = axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await;

    db.close().await;

    if let Err(e) = served {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}

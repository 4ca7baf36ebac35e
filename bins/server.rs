use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and DATABASE_URL apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = server::startup::load_config();
    let instance = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(%instance, pid, message = %info, "flight records server panicked");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %instance,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "flight records server starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(%instance, pid, "flight records server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%instance, pid, error = %e, "flight records server failed");
            ExitCode::FAILURE
        }
    }
}

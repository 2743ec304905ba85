use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // Load .env first so RUST_LOG / LOG_FORMAT set there take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "consignment", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "consignment",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    // A config file that exists but cannot be parsed is fatal; a missing one means defaults.
    let worker_threads = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(e) => {
            error!(service = "consignment", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "consignment", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "consignment",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "consignment service starting"
    );

    // server::run serves until Ctrl+C and drains in-flight calls before returning
    rt.block_on(async move {
        match server::run().await {
            Ok(()) => {
                info!(service = "consignment", event = "stop", %service_id, pid, "consignment service stopped");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "consignment", event = "run_failed", error = %e, "failed to listen or serve");
                std::process::ExitCode::FAILURE
            }
        }
    })
}

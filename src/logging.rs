use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing for the console.
///
/// Two layers:
/// - a compact console layer filtered by `LOG_LEVEL` (default `info`),
///   with noisy HTTP internals held at `warn`
/// - a daily rolling file under `storage/logs` capturing errors
///
/// Returns the appender guard; dropping it stops file logging, so `main`
/// holds it for the life of the process.
pub fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let log_dir = "storage/logs";
    std::fs::create_dir_all(log_dir).expect("Failed to create logs directory");

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},hyper=warn,reqwest=warn",
            env!("CARGO_CRATE_NAME"),
            log_level
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "registra.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

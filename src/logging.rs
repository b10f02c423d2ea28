use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing. `RUST_LOG` wins over the `verbose` flag; without
/// either, the crate logs at info. Logs go to stderr in compact form, and
/// additionally to a daily-rolling JSON file when `log_file` is given.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plenum={}", default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file {
        Some(log_path) => {
            let dir = log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let _ = std::fs::create_dir_all(dir);
            let file_name = log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("plenum.log"));
            let file_appender = tracing_appender::rolling::daily(dir, file_name);

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .json();

            subscriber.with(file_layer).init();
        }
        None => subscriber.init(),
    }
}

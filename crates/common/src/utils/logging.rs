use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - Writes to stdout to improve visibility in environments that hide stderr
/// - `LOG_FORMAT=json` switches to structured JSON output for container logs
pub fn init_logging(service: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(|| io::stdout());
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    info!(%service, event = "logger_init", "tracing subscriber initialized");
}

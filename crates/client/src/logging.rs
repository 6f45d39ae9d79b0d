use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Install the global subscriber. `RUST_LOG` overrides `level`.
///
/// Logs go to stderr so command output on stdout stays clean. The returned
/// guard flushes buffered lines on drop and must be held for the life of the
/// process.
pub fn init_logging(level: tracing::Level) -> WorkerGuard {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    // a second init (tests, embedding) keeps the existing subscriber
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();

    guard
}

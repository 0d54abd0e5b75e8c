use std::io::stderr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    Layer,
    filter::ParseError,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::prelude::*;

/// Our own progress at `info`, only problems from the HTTP stack.
const DEFAULT_DIRECTIVES: &str = "warn,disastermap=info";

/// Initialize logging to stderr.
///
/// The returned guard flushes the writer on drop, keep it alive until the end of `main`.
pub fn init() -> Result<WorkerGuard> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (format_filter, parse_error) = format_filter(directives.as_deref());
    let (stderr, stderr_guard) = tracing_appender::non_blocking(stderr());
    let subscriber_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .without_time()
        .with_filter(format_filter);

    tracing_subscriber::Registry::default().with(subscriber_layer).try_init()?;

    if let Some(error) = parse_error {
        warn!("⚠️ Ignoring invalid `{}`, using `{DEFAULT_DIRECTIVES}`: {error:#}", EnvFilter::DEFAULT_ENV);
    }
    Ok(stderr_guard)
}

/// Fall back to the defaults when the directives are missing or cannot be parsed.
fn format_filter(directives: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(error)) => (EnvFilter::new(DEFAULT_DIRECTIVES), Some(error)),
        None => (EnvFilter::new(DEFAULT_DIRECTIVES), None),
    }
}

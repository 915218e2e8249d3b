//!
//! Setup logging subsystem.
//!

use error_stack::ResultExt;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::config::{self, LogFormat};

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A global subscriber is already installed for this process.
    #[error("Failed to install the global tracing subscriber")]
    SubscriberInitFailed,
}

/// Keeps the non-blocking log writers alive; buffered lines are flushed when it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// `RUST_LOG`, when set, further restricts what the configured console filter lets through.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> error_stack::Result<TelemetryGuard, LoggerError> {
    let mut guards = Vec::new();

    let subscriber = tracing_subscriber::registry().with(EnvFilter::try_from_default_env().ok());

    let installed = if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let level = conf.console.level.into_level();
        let console_filter = crates_to_watch
            .into_iter()
            .fold(filter::Targets::new().with_default(tracing::Level::WARN), |filter, acrate| {
                filter.with_target(acrate.as_ref().to_owned(), level)
            });

        match conf.console.log_format {
            LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .with_span_events(fmt::format::FmtSpan::CLOSE)
                    .pretty()
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()
            }
            LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()
            }
        }
    } else {
        subscriber.try_init()
    };

    installed
        .change_context(LoggerError::SubscriberInitFailed)
        .attach_printable_lazy(|| format!("service: {service_name}"))?;

    tracing::debug!(service = service_name, "logger initialised");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

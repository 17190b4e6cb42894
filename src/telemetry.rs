use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::settings::TracingSettings;

/// Initialize tracing: apply an `EnvFilter` using the `RUST_LOG`
/// environment variable to define the log levels, falling back to the
/// configured level, and add a formatter layer writing trace events to
/// stdout.
pub fn init_tracing(settings: &TracingSettings) {
    LogTracer::init().expect("set log tracer");

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = Registry::default()
        .with(filter_layer)
        .with(fmt::Layer::new().with_writer(std::io::stdout));

    tracing::subscriber::set_global_default(subscriber).expect("set global tracing subscriber");
}

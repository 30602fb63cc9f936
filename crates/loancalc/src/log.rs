pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Filter used when `RUST_LOG` is not set.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_FILTER: &str = "tracing=info,loancalc=debug,loancalc_backend=debug,tower_http=debug";

#[cfg(target_arch = "wasm32")]
/// Setup logging for the browser build.
/// Routes panics to the console and installs the [`tracing-web`] console writer
/// together with its performance layer.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
    use tracing_subscriber::fmt::time::UtcTime;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeConsoleWriter)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup logging for native processes.
/// Installs [`color_eyre`] for error reports and a [`tracing-subscriber`] fmt
/// subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// `RUST_LIB_BACKTRACE` defaults to `1` when unset.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        // Single-threaded at this point; nothing else reads the environment yet.
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}

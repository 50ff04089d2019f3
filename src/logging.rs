//! Log setup. Output goes to stderr so it never mixes with the display.
//!
//! `RUST_LOG` picks the filter unless debug logging is on, which shows every
//! calculator transition. Debug logging can be flipped at runtime.

use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const DEBUG_FILTER: &str = "padcalc=trace";
const DEFAULT_FILTER: &str = "warn";

pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    debug: bool,
}

impl LogControl {
    /// Flips debug logging and returns the state now in effect, which is
    /// unchanged when the filter could not be swapped.
    pub fn toggle(&mut self) -> bool {
        match self.handle.reload(filter(!self.debug)) {
            Ok(()) => self.debug = !self.debug,
            Err(err) => warn!(%err, "Failed to change log filter"),
        }
        self.debug
    }
}

pub fn init(debug: bool) -> LogControl {
    let (filter_layer, handle) = reload::Layer::new(filter(debug));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
    LogControl { handle, debug }
}

fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

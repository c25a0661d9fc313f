//! Tracing initialization.
//! One compact stdout layer with a local timestamp, configured once at
//! startup and never reconfigured. Copy progress and failures are the only
//! observable output of a run besides the destination tree itself.

use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (YYYY-MM-DD HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Initialize tracing with an INFO-level compact subscriber on stdout.
///
/// Must be called at most once, before any work begins. Panics if a global
/// subscriber is already installed.
pub fn init() {
    let stdout_layer = tsfmt::layer()
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(false)
        .compact();

    registry().with(EnvFilter::new("info")).with(stdout_layer).init();
}

use std::path::PathBuf;
use std::time::Duration;

use crate::table::Palette;

/// Time between two refreshes
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Consecutive unreachable-runtime cycles tolerated before giving up
pub const MAX_CONSECUTIVE_FAILURES: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub interval: Duration,
    pub max_consecutive_failures: u32,
    pub palette: Palette,
    /// Render a single frame and stop
    pub once: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: REFRESH_INTERVAL,
            max_consecutive_failures: MAX_CONSECUTIVE_FAILURES,
            palette: Palette::default(),
            once: false,
        }
    }
}

/// Log file location; stdout belongs to the table, so logs never go there.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dockwatch")
        .join("dockwatch.log")
}

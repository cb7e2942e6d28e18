//! Terminal spinner shown while a generation is being processed

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
});

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner tracking the stages of a single generation
///
/// A hidden indicator accepts the same calls without drawing anything.
pub struct ProcessingIndicator {
    bar: ProgressBar,
}

impl ProcessingIndicator {
    /// Create a visible spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        Self { bar }
    }

    /// Create an indicator that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Indicator matching the quiet flag
    pub fn for_quiet(quiet: bool) -> Self {
        if quiet { Self::hidden() } else { Self::new() }
    }

    /// Begin animating with the given stage message
    pub fn start(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(TICK_INTERVAL);
    }

    /// Replace the stage message
    pub fn stage(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Current stage message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner, leaving a final message on screen
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Stop the spinner and erase it
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProcessingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

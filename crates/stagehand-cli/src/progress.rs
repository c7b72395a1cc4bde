//! Progress spinner for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use stagehand_core::ProgressCallback;
use std::time::Duration;

/// CLI spinner implementing `ProgressCallback`.
///
/// Streamed containers do not announce their entry count, so this shows a
/// running entry count and byte total instead of a bar. Cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_written: u64,
    current: String,
}

impl CliProgress {
    /// Creates a spinner showing `message` (e.g. "Materializing").
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ Materializing 42 entries (15.2 MB) assets/app.js"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix} {pos} entries {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        let progress = Self {
            bar,
            bytes_written: 0,
            current: String::new(),
        };
        progress.refresh_message();
        progress
    }

    fn refresh_message(&self) {
        let total = humanize_bytes(self.bytes_written);
        if self.current.is_empty() {
            self.bar.set_message(format!("({total})"));
        } else {
            self.bar.set_message(format!("({total}) {}", self.current));
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, name: &str, _index: usize) {
        name.clone_into(&mut self.current);
        self.refresh_message();
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written = self.bytes_written.saturating_add(bytes);
        self.refresh_message();
    }

    fn on_entry_complete(&mut self, _name: &str) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB, TB).
fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_bytes() {
        assert_eq!(humanize_bytes(0), "0 B");
        assert_eq!(humanize_bytes(512), "512 B");
        assert_eq!(humanize_bytes(1536), "1.5 KB");
        assert_eq!(humanize_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(humanize_bytes(1024_u64.pow(4)), "1.0 TB");
    }

    #[test]
    fn test_progress_callback() {
        let mut progress = CliProgress::new("Testing");

        progress.on_entry_start("assets/app.js", 1);
        progress.on_bytes_written(1024);
        progress.on_entry_complete("assets/app.js");
        progress.on_bytes_written(1024);

        assert_eq!(progress.bytes_written, 2048);
        assert_eq!(progress.bar.position(), 1);
    }

    #[test]
    fn test_byte_total_shown_in_message() {
        let mut progress = CliProgress::new("Testing");
        assert_eq!(progress.bar.message(), "(0 B)");

        progress.on_entry_start("assets/app.js", 1);
        progress.on_bytes_written(1536);

        assert_eq!(progress.bar.message(), "(1.5 KB) assets/app.js");
        assert_eq!(progress.bar.length(), None);
    }
}

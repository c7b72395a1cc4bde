//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use stagehand_core::EntryKind;
use stagehand_core::EntryListing;
use stagehand_core::MaterializeReport;
use stagehand_core::StagedAssets;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, c) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    fn write_heading(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn write_report(&self, report: &MaterializeReport) {
        let _ = self.term.write_line(&format!(
            "  Files written:    {}",
            Self::format_number(report.files_written)
        ));
        let _ = self.term.write_line(&format!(
            "  Directories:      {}",
            Self::format_number(report.directories_created)
        ));
        let _ = self.term.write_line(&format!(
            "  Total size:       {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Entries skipped:  {}",
                Self::format_number(report.entries_skipped)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration:         {:?}", report.duration));
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_materialize_result(
        &self,
        operation: &str,
        output_dir: &Path,
        report: &MaterializeReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let verb = if operation == "extract-file" {
            "Extracted into"
        } else {
            "Materialized into"
        };
        self.write_heading(&format!("{verb} {}", output_dir.display()));
        self.write_report(report);

        Ok(())
    }

    fn format_stage_result(&self, staged: &StagedAssets) -> Result<()> {
        // The document root is the result; print it even when quiet so it
        // can be captured by scripts.
        if self.quiet {
            let _ = self.term.write_line(&staged.root().display().to_string());
            return Ok(());
        }

        self.write_heading(&format!("Staged {}", staged.source().path().display()));
        let _ = self
            .term
            .write_line(&format!("  Document root:    {}", staged.root().display()));
        let welcome = if staged.has_welcome_file() {
            staged.welcome_file().to_string()
        } else {
            format!("{} (missing)", staged.welcome_file())
        };
        let _ = self
            .term
            .write_line(&format!("  Welcome file:     {welcome}"));
        self.write_report(staged.report());

        Ok(())
    }

    fn format_listing(&self, listing: &EntryListing, long: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if !long {
            for entry in &listing.entries {
                let _ = self.term.write_line(entry.name());
            }
            return Ok(());
        }

        for entry in &listing.entries {
            let type_char = match entry.kind() {
                EntryKind::File => "-",
                EntryKind::Directory => "d",
                EntryKind::Other => "l",
            };
            let size_str = entry
                .size()
                .map_or_else(|| "-".to_string(), |size| size.to_string());

            let _ = self
                .term
                .write_line(&format!("{type_char} {size_str:>10}  {}", entry.name()));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} files, {} directories, {} ({} skipped)",
            Self::format_number(listing.file_count()),
            Self::format_number(listing.directory_count()),
            Self::format_size(listing.total_size()),
            Self::format_number(listing.skipped)
        ));

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}

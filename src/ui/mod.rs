//! Progress presentation for extraction
//!
//! All progress reporting goes through the [`ProgressReporter`] trait, so the
//! extractor does not care whether it is drawing a bar, printing one line per
//! file (`--verbose`) or staying silent (tests, non-terminal output).

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for extraction runs
pub trait ProgressReporter {
    /// Initialize progress with the number of files about to be written
    fn init(&mut self, total_files: u64);

    /// A file was written (path relative to `.agent`)
    fn file_written(&mut self, relative_path: &str);

    /// A resource was skipped
    fn skipped(&mut self, key: &str, reason: &str);

    /// All files written
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Pick the reporter for the current terminal and verbosity
pub fn reporter_for(verbose: bool) -> Box<dyn ProgressReporter> {
    if verbose {
        Box::new(VerboseProgressReporter)
    } else if Term::stdout().is_term() {
        Box::new(InteractiveProgressReporter::default())
    } else {
        Box::new(SilentProgressReporter)
    }
}

/// Interactive progress bar
#[derive(Default)]
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl ProgressReporter for InteractiveProgressReporter {
    fn init(&mut self, total_files: u64) {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);
        self.file_pb = Some(file_pb);
    }

    fn file_written(&mut self, relative_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.set_message(relative_path.to_string());
            file_pb.inc(1);
        }
    }

    fn skipped(&mut self, _key: &str, _reason: &str) {}

    fn finish(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
    }
}

/// One line per written or skipped file
pub struct VerboseProgressReporter;

impl ProgressReporter for VerboseProgressReporter {
    fn init(&mut self, total_files: u64) {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("Extracting {total_files} templates"))
        );
    }

    fn file_written(&mut self, relative_path: &str) {
        println!("  {} {relative_path}", Style::new().green().apply_to("+"));
    }

    fn skipped(&mut self, key: &str, reason: &str) {
        eprintln!(
            "  {} {key}: {reason}",
            Style::new().yellow().apply_to("skipped")
        );
    }

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// No-op reporter
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn init(&mut self, _total_files: u64) {}

    fn file_written(&mut self, _relative_path: &str) {}

    fn skipped(&mut self, _key: &str, _reason: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

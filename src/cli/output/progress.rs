//! Per-record progress output on stderr.
//!
//! Every appended record produces one line, `id [strategy] -> status`. When
//! stderr is a terminal an indicatif bar tracks overall progress below the
//! lines; otherwise only the lines are written.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::domain::models::RunRecord;
use crate::domain::ports::RunObserver;

/// Style templates for different progress bar types
const PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg} (ETA: {eta})";

/// Progress bar characters for visual effect
const PROGRESS_CHARS: &str = "█▓▒░ ";

/// Create a standard progress bar with ETA calculation, drawn on stderr
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .expect("Invalid progress bar template")
            .progress_chars(PROGRESS_CHARS),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Plain progress line for one record.
pub fn progress_line(record: &RunRecord) -> String {
    match &record.strategy {
        Some(strategy) => format!("{} [{}] -> {}", record.id, strategy, record.status()),
        None => format!("{} -> {}", record.id, record.status()),
    }
}

/// [`RunObserver`] writing progress lines to stderr.
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new(total: usize) -> Self {
        let bar = Term::stderr()
            .is_term()
            .then(|| create_progress_bar(total as u64));
        Self { bar }
    }

    /// Progress lines only, no bar.
    pub fn lines_only() -> Self {
        Self { bar: None }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    fn styled_line(record: &RunRecord) -> String {
        let line = progress_line(record);
        if record.is_success() {
            line
        } else {
            style(line).for_stderr().red().to_string()
        }
    }
}

impl RunObserver for ConsoleProgress {
    fn on_record(&self, record: &RunRecord) {
        let line = Self::styled_line(record);
        // Progress output is best effort; a closed stderr must not stop the run.
        match &self.bar {
            Some(bar) => {
                bar.suspend(|| {
                    let _ = Term::stderr().write_line(&line);
                });
                bar.inc(1);
            }
            None => {
                let _ = Term::stderr().write_line(&line);
            }
        }
    }
}

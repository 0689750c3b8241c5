//! Progress display for the tile extraction pass

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static EXTRACTION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks grid cells visited during extraction and the unique tiles found
pub struct ExtractionProgress {
    bar: ProgressBar,
}

impl ExtractionProgress {
    /// Create a progress bar over `cell_count` grid cells
    pub fn new(source: &Path, cell_count: u64) -> Self {
        let bar = ProgressBar::new(cell_count);
        bar.set_style(EXTRACTION_STYLE.clone());
        bar.set_prefix(
            source
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(cell_count: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(cell_count);
        Self { bar }
    }

    /// Record one visited cell and the current unique tile count
    pub fn advance(&self, unique_tiles: usize) {
        self.bar.inc(1);
        self.bar.set_message(format!("({unique_tiles} unique)"));
    }

    /// Number of cells visited so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of cells to visit
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

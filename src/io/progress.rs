//! Multi-document progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for batch renders
///
/// Shows one bar per document counting rendered layers, and adds a batch
/// bar counting documents once the batch is too large to list every file
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    document_bars: Vec<ProgressBar>,
    /// (`name`, `layers_done`, `layer_count`) per started document
    document_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LAYER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Documents: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty progress display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            document_bars: Vec::new(),
            document_states: Vec::new(),
        }
    }

    /// Create the bars for a batch of `document_count` documents
    pub fn initialize(&mut self, document_count: usize) {
        if document_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(document_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..document_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(LAYER_STYLE.clone());
            self.document_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register document `index` with `layer_count` layers to render
    pub fn start_document(&mut self, index: usize, path: &Path, layer_count: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.document_states.len() {
            self.document_states
                .resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.document_states.get_mut(index) {
            *state = (name, 0, layer_count);
        }
        self.update_bars();
    }

    /// Report that `layers_done` layers of document `index` are drawn
    pub fn update_layers(&mut self, index: usize, layers_done: usize) {
        if let Some(state) = self.document_states.get_mut(index) {
            state.1 = layers_done.min(state.2);
        }
        self.update_bars();
    }

    /// Mark document `index` as written
    pub fn complete_document(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.document_states.get_mut(index) {
            state.0 = format!("✓ {} ({:.2}s)", state.0, elapsed.as_secs_f64());
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Progress of document `index` as (`layers_done`, `layer_count`)
    pub fn document_progress(&self, index: usize) -> Option<(usize, usize)> {
        self.document_states
            .get(index)
            .filter(|(name, _, _)| !name.is_empty())
            .map(|(_, done, total)| (*done, *total))
    }

    /// Clear all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All documents rendered");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recently started documents on the available bars
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .document_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (name, done, total)) in self.document_bars.iter().zip(visible) {
            bar.set_length(*total as u64);
            bar.set_position(*done as u64);
            let width = total.to_string().len();
            bar.set_message(format!("{done:>width$}/{total} layers"));
            bar.set_prefix(name.clone());
        }

        for bar in self.document_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}

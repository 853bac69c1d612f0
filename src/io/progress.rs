//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROCESSING_STAGES};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Stage of the per-file pipeline, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the occupancy mask
    Load,
    /// Running the rectangle combiner
    Combine,
    /// Placing edge decals
    Decals,
    /// Writing the debug image
    Export,
}

impl Stage {
    /// Every stage, in pipeline order
    pub const ALL: [Self; PROCESSING_STAGES] =
        [Self::Load, Self::Combine, Self::Decals, Self::Export];

    /// Number of stages finished once this one completes
    pub const fn position(self) -> usize {
        match self {
            Self::Load => 1,
            Self::Combine => 2,
            Self::Decals => 3,
            Self::Export => 4,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Combine => "combine",
            Self::Decals => "decals",
            Self::Export => "export",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    completed: usize,
    label: &'static str,
}

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and a single batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files the manager was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Whether the single batch bar is in use
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Configure progress bar for a new file
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name,
                completed: 0,
                label: "",
            };
        }
        self.update_bars();
    }

    /// Record that a stage of a file has finished
    pub fn finish_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.completed = stage.position();
            state.label = stage.label();
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {} ({}ms)", state.name, elapsed.as_millis());
            state.completed = PROCESSING_STAGES;
            state.label = "done";
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(PROCESSING_STAGES as u64);
                bar.set_position(state.completed as u64);
                bar.set_message(format!("{:>8}", state.label));
                bar.set_prefix(state.name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}

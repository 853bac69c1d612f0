//! Command-line interface for batch merging of occupancy masks

use crate::algorithm::combiner::{CombineConfig, RectangleCombiner, count_by_size};
use crate::algorithm::decals::generate_decals;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_CHANCE_2X2, DEFAULT_CHANCE_OTHER, MAX_IMAGE_DIMENSION,
    OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, TileError, invalid_parameter, io_error};
use crate::io::image::export_debug_png;
use crate::io::mask::load_mask;
use crate::io::progress::{ProgressManager, Stage};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tilemerge")]
#[command(
    author,
    version,
    about = "Merge occupied grid cells into larger tiles and place edge decals"
)]
/// Command-line arguments for the tile merging tool
pub struct Cli {
    /// Input mask (.png or .txt) or directory of masks to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible output; a bare flag uses the default seed
    // Kept in step with DEFAULT_SEED
    #[arg(short, long, num_args = 0..=1, default_missing_value = "42")]
    pub seed: Option<u64>,

    /// Per-cell probability of attempting a 2x2 merge
    #[arg(long = "chance-2x2", default_value_t = DEFAULT_CHANCE_2X2)]
    pub chance_2x2: f64,

    /// Per-cell probability of attempting 2x1 and 1x2 merges
    #[arg(long = "chance-other", default_value_t = DEFAULT_CHANCE_OTHER)]
    pub chance_other: f64,

    /// Size of one grid cell in the output image, in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log per-pass details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated combiner settings from the chance flags
    ///
    /// # Errors
    ///
    /// Returns an error if either chance lies outside `[0, 1]`
    pub fn combine_config(&self) -> Result<CombineConfig> {
        CombineConfig::new(self.chance_2x2, self.chance_other)
    }

    /// Validated cell size
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size is zero or larger than the maximum
    /// image dimension
    pub fn validated_cell_size(&self) -> Result<u32> {
        if !(1..=MAX_IMAGE_DIMENSION).contains(&self.cell_size) {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be within 1..={MAX_IMAGE_DIMENSION} pixels"),
            ));
        }
        Ok(self.cell_size)
    }
}

/// Whether a path looks like a mask this tool can read
pub fn is_mask_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref(),
        Some("png" | "txt")
    )
}

/// Whether a path is an image this tool wrote
pub fn is_output_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

/// Where the debug image for an input mask is written
pub fn output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        OUTPUT_EXTENSION
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Orchestrates batch processing of mask files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    rng: StdRng,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// Files share one generator, seeded from `--seed` when given and from
    /// the operating system otherwise.
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            cli,
            progress_manager,
            rng,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.combine_config()?;
        let cell_size = self.cli.validated_cell_size()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("Nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let combiner = RectangleCombiner::new(config);
        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &combiner, cell_size)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Input files selected by the target, in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing, is an unsupported file, or
    /// its directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_mask_file(target) {
                return Err(io_error("Target file must be a .png or .txt mask"));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| TileError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && is_mask_file(&path)
                    && !is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a mask file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path(input_path).exists() {
            log::warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn finish_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage(index, stage);
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        combiner: &RectangleCombiner,
        cell_size: u32,
    ) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let grid = load_mask(input_path, cell_size)?;
        self.finish_stage(index, Stage::Load);

        let rectangles = combiner.combine_with(&grid, &mut self.rng);
        self.finish_stage(index, Stage::Combine);

        let decals = generate_decals(&grid, &mut self.rng);
        self.finish_stage(index, Stage::Decals);

        let output = output_path(input_path);
        export_debug_png(&grid, &rectangles, &decals, &output)?;
        self.finish_stage(index, Stage::Export);

        let sizes = count_by_size(&rectangles)
            .iter()
            .map(|(size, count)| format!("{size}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        log::info!(
            "{}: {} cells -> {} rectangles [{}], {} decals -> {}",
            input_path.display(),
            grid.occupied_count(),
            rectangles.len(),
            sizes,
            decals.len(),
            output.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }
}

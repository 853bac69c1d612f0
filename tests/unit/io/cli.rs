//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;
    use tilemerge::TileError;
    use tilemerge::io::cli::{Cli, FileProcessor, is_mask_file, is_output_file, output_path};
    use tilemerge::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_CHANCE_2X2, DEFAULT_CHANCE_OTHER, DEFAULT_SEED,
    };

    // Tests CLI parsing with only required target file argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "mask.png"]);

        assert_eq!(cli.target, PathBuf::from("mask.png"));
        assert_eq!(cli.seed, None);
        assert!((cli.chance_2x2 - DEFAULT_CHANCE_2X2).abs() < f64::EPSILON);
        assert!((cli.chance_other - DEFAULT_CHANCE_OTHER).abs() < f64::EPSILON);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the chance flag targets
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "masks",
            "--seed",
            "123",
            "--chance-2x2",
            "0.75",
            "--chance-other",
            "0.25",
            "--cell-size",
            "32",
            "--quiet",
            "--no-skip",
            "--verbose",
        ]);

        assert_eq!(cli.seed, Some(123));
        assert!((cli.chance_2x2 - 0.75).abs() < f64::EPSILON);
        assert!((cli.chance_other - 0.25).abs() < f64::EPSILON);
        assert_eq!(cli.cell_size, 32);
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        assert!(cli.verbose);
    }

    // Tests a bare seed flag falls back to the default seed
    // Verified by removing the default missing value
    #[test]
    fn test_bare_seed_uses_default() {
        let cli = Cli::parse_from(["program", "mask.png", "--seed"]);

        assert_eq!(cli.seed, Some(DEFAULT_SEED));
    }

    // Tests invalid tunables are rejected before any file is touched
    // Verified by skipping validation in process
    #[test]
    fn test_invalid_tunables() {
        let bad_chance = Cli::parse_from(["program", "mask.png", "--chance-2x2", "1.5"]);
        assert!(bad_chance.combine_config().is_err());

        let zero_cell = Cli::parse_from(["program", "mask.png", "--cell-size", "0"]);
        assert!(matches!(
            zero_cell.validated_cell_size(),
            Err(TileError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));
        assert!(FileProcessor::new(zero_cell).process().is_err());
    }

    // Tests cell sizes are capped at the image limit
    // Verified by only rejecting a zero cell size
    #[test]
    fn test_cell_size_bounds() {
        let huge_cell = Cli::parse_from(["program", "mask.png", "--cell-size", "3000000000"]);
        assert!(matches!(
            huge_cell.validated_cell_size(),
            Err(TileError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));

        let over_cell = Cli::parse_from(["program", "mask.png", "-c", "16385"]);
        assert!(over_cell.validated_cell_size().is_err());

        let max_cell = Cli::parse_from(["program", "mask.png", "-c", "16384"]);
        assert_eq!(max_cell.validated_cell_size().ok(), Some(16_384));
    }

    // Tests an oversized mask fails at load before any export is attempted
    // Verified by deferring the extent check to rendering
    #[test]
    fn test_oversized_mask_fails_before_export() {
        let dir = tempdir().expect("temp dir");
        let mask = dir.path().join("wide.txt");
        fs::write(&mask, format!("{}\n", "#".repeat(300))).expect("write mask");

        let wide_cli =
            Cli::parse_from(["program".into(), mask.into_os_string(), "--quiet".into()]);
        assert!(matches!(
            FileProcessor::new(wide_cli).process(),
            Err(TileError::InvalidMask { .. })
        ));
        assert!(!dir.path().join("wide_tiles.png").exists());
    }

    // Tests output naming keeps the directory and swaps the extension
    // Verified by keeping the input extension
    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("levels/room.txt")),
            PathBuf::from("levels/room_tiles.png")
        );
        assert_eq!(output_path(Path::new("a.png")), PathBuf::from("a_tiles.png"));
    }

    #[test]
    fn test_file_classification() {
        assert!(is_mask_file(Path::new("a.png")));
        assert!(is_mask_file(Path::new("b.TXT")));
        assert!(!is_mask_file(Path::new("c.gif")));
        assert!(!is_mask_file(Path::new("noext")));
        assert!(is_output_file(Path::new("a_tiles.png")));
        assert!(!is_output_file(Path::new("tiles.png")));
    }

    // Tests directory processing writes outputs and skips them afterwards
    // Verified by treating previous outputs as masks
    #[test]
    fn test_process_directory() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("room.txt"), "##.\n###\n").expect("write mask");
        fs::write(dir.path().join("notes.md"), "ignored").expect("write note");

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", target.as_str(), "--quiet", "--seed", "5", "-c", "4"]);
        let mut processor = FileProcessor::new(cli);
        assert_eq!(processor.collect_files().map(|f| f.len()).ok(), Some(1));

        processor.process().expect("processing should succeed");

        let output = dir.path().join("room_tiles.png");
        let img = image::open(&output).expect("output should decode");
        assert_eq!((img.width(), img.height()), (12, 8));

        // Existing output is skipped and never read back as a mask
        let rerun_cli = Cli::parse_from(["program", target.as_str(), "--quiet"]);
        let rerun = FileProcessor::new(rerun_cli);
        assert_eq!(rerun.collect_files().map(|f| f.len()).ok(), Some(0));

        let forced_cli = Cli::parse_from(["program", target.as_str(), "--quiet", "--no-skip"]);
        let forced = FileProcessor::new(forced_cli);
        assert_eq!(
            forced.collect_files().ok(),
            Some(vec![dir.path().join("room.txt")])
        );
    }

    // Tests bad targets are reported
    // Verified by accepting any existing file
    #[test]
    fn test_invalid_targets() {
        let dir = tempdir().expect("temp dir");
        let note = dir.path().join("notes.md");
        fs::write(&note, "not a mask").expect("write note");

        let note_cli = Cli::parse_from(["program".into(), note.into_os_string()]);
        assert!(FileProcessor::new(note_cli).collect_files().is_err());

        let missing = dir.path().join("missing");
        let missing_cli = Cli::parse_from(["program".into(), missing.into_os_string()]);
        assert!(FileProcessor::new(missing_cli).process().is_err());
    }
}

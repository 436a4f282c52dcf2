use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aspect_audit")]
#[command(about = "Find images whose aspect ratio deviates from a target ratio")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree and list non-conforming images
    Scan {
        /// Root directory to scan recursively
        target_directory: PathBuf,

        /// Case-insensitive substring the file name must contain
        #[arg(short, long)]
        name: Option<String>,

        /// Target aspect ratio (e.g. 16:9, 16/9 or 1.7778)
        #[arg(short, long)]
        ratio: Option<String>,

        /// Allowed deviation from the target ratio, in percent
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Output file for the list of non-conforming paths
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File extension to match (case-insensitive, default: jpg)
        #[arg(long)]
        extension: Option<String>,

        /// Number of parallel workers (1 = sequential)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Size the worker pool from the CPU count
        #[arg(short = 'P', long)]
        parallel: bool,

        /// Follow symbolic links while walking the tree
        #[arg(short = 'L', long)]
        follow_links: bool,

        /// JSON configuration file; explicit flags override its values
        #[arg(short = 'c', long)]
        config_file: Option<PathBuf>,

        /// Only print the final summary and failures
        #[arg(short, long)]
        quiet: bool,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a single width x height against the target ratio
    Check {
        /// Image width in pixels
        width: u32,

        /// Image height in pixels
        height: u32,

        /// Target aspect ratio (e.g. 16:9, 16/9 or 1.7778)
        #[arg(short, long, default_value = "16:9")]
        ratio: String,

        /// Allowed deviation from the target ratio, in percent
        #[arg(short, long, default_value = "2.0")]
        tolerance: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_with_flags() {
        let cli = Cli::try_parse_from([
            "aspect_audit",
            "scan",
            "/media",
            "-n",
            "fanart",
            "-r",
            "16:9",
            "-t",
            "3",
            "-o",
            "out.txt",
            "-j",
            "4",
        ])
        .unwrap();

        match cli.command {
            Commands::Scan {
                target_directory,
                name,
                ratio,
                tolerance,
                output,
                threads,
                quiet,
                ..
            } => {
                assert_eq!(target_directory, PathBuf::from("/media"));
                assert_eq!(name.as_deref(), Some("fanart"));
                assert_eq!(ratio.as_deref(), Some("16:9"));
                assert_eq!(tolerance, Some(3.0));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
                assert_eq!(threads, Some(4));
                assert!(!quiet);
            }
            other => panic!("Expected scan command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::try_parse_from(["aspect_audit", "check", "1920", "1080"]).unwrap();

        match cli.command {
            Commands::Check {
                width,
                height,
                ratio,
                tolerance,
            } => {
                assert_eq!((width, height), (1920, 1080));
                assert_eq!(ratio, "16:9");
                assert_eq!(tolerance, 2.0);
            }
            other => panic!("Expected check command, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_requires_directory() {
        assert!(Cli::try_parse_from(["aspect_audit", "scan"]).is_err());
    }
}

//! Command-line argument definitions for the Blueprint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument is optional: running without any writes the
//! Task Tracker diagrams as PNG files into the current directory.

use clap::Parser;

use blueprint::config::OutputFormat;

/// Command-line arguments for the Blueprint diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the diagrams are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Output format (png, svg, jpg, pdf, dot); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["blueprint"]).unwrap();
        assert_eq!(args.output_dir, ".");
        assert_eq!(args.format, None);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_format_flag() {
        let args = Args::try_parse_from(["blueprint", "--format", "svg", "-o", "out"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Svg));
        assert_eq!(args.output_dir, "out");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["blueprint", "--format", "gif"]).is_err());
    }
}

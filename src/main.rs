//! Rich listing viewer - entry point

use clap::Parser;
use richlist::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use richlist::parser::EmphasisTags;
use richlist::source::{detect_input_source, load_document};
use richlist::view::{measure_document, run_with_source};
use std::path::PathBuf;
use tracing::info;

/// Rich listing viewer - scroll through a markup document in the terminal
#[derive(Parser, Debug)]
#[command(name = "richlist")]
#[command(version)]
#[command(about = "Scroll through a rich-markup listing in the terminal")]
pub struct Args {
    /// Path to the markup document (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rows added after every text entry
    #[arg(long, allow_negative_numbers = true)]
    pub spacing: Option<f32>,

    /// Height of separator bands, in rows
    #[arg(long)]
    pub gap_height: Option<f32>,

    /// Print the content height and exit without opening the viewer
    #[arg(long)]
    pub measure: bool,

    /// Terminal width used by --measure
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,
}

/// Defaults → config file → environment → command line.
fn resolve_config(args: &Args) -> Result<ResolvedConfig, Box<dyn std::error::Error>> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, args.spacing, args.gap_height))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;
    richlist::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let mut source = detect_input_source(args.file.clone())?;
    let document = load_document(&mut source, &EmphasisTags::default())?;

    if args.measure {
        let height = measure_document(&document.entries, &document.base_dir, &config, args.width);
        println!("{height}");
        return Ok(());
    }

    run_with_source(document, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["richlist", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["richlist", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["richlist"]);
        assert_eq!(args.file, None);
        assert_eq!(args.config, None);
        assert_eq!(args.spacing, None);
        assert_eq!(args.gap_height, None);
        assert!(!args.measure);
        assert_eq!(args.width, 80);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["richlist", "rules.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("rules.txt")));
    }

    #[test]
    fn test_measure_with_width() {
        let args = Args::parse_from(["richlist", "--measure", "--width", "40", "rules.txt"]);
        assert!(args.measure);
        assert_eq!(args.width, 40);
    }

    #[test]
    fn test_width_rejects_zero() {
        let err = Args::try_parse_from(["richlist", "--width", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_negative_spacing_is_accepted() {
        let args = Args::parse_from(["richlist", "--spacing", "-1"]);
        assert_eq!(args.spacing, Some(-1.0));
    }

    #[test]
    fn test_gap_height_rejects_text() {
        assert!(Args::try_parse_from(["richlist", "--gap-height", "tall"]).is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["richlist", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_flags_win_over_config_file() {
        let dir = std::env::temp_dir().join("richlist_main_precedence");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "spacing = 3.0\ngap_height = 4.0\n").unwrap();

        let args = Args::parse_from([
            "richlist",
            "--config",
            path.to_str().unwrap(),
            "--spacing",
            "1",
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.spacing, 1.0);
        assert_eq!(config.gap_height, 4.0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}

//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod show;
mod tokens;
mod validate;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{self, ConfigError, ConfigFormat, TailwindConfig};
use crate::logging;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// twc - inspect, validate and write the utility-CSS build configuration
#[derive(Parser)]
#[command(name = "twc")]
#[command(about = "Inspect, validate and write the utility-CSS build configuration")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file to read (.js, .cjs, .mjs, .json, .json5, .toml).
    /// If omitted, tailwind.config.* is searched for from the current
    /// directory upwards, falling back to the built-in configuration.
    #[arg(short, long, global = true, conflicts_with = "builtin")]
    pub config: Option<PathBuf>,

    /// Use the built-in configuration, skip config file discovery
    #[arg(long, global = true)]
    pub builtin: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "js")]
        format: ConfigFormat,

        /// Additional content glob (repeatable)
        #[arg(long = "content", value_name = "GLOB")]
        content: Vec<String>,

        /// Additional plugin module (repeatable)
        #[arg(long = "plugin", value_name = "MODULE")]
        plugins: Vec<String>,
    },
    /// Write the configuration to a file
    Write {
        /// Output file (default: tailwind.config.<ext> for the chosen format)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: inferred from the output extension, else js)
        #[arg(short, long, value_enum)]
        format: Option<ConfigFormat>,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,

        /// Additional content glob (repeatable)
        #[arg(long = "content", value_name = "GLOB")]
        content: Vec<String>,

        /// Additional plugin module (repeatable)
        #[arg(long = "plugin", value_name = "MODULE")]
        plugins: Vec<String>,
    },
    /// Check content globs and token values
    Validate {
        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List theme tokens
    Tokens {
        /// Only list this section (e.g. colors, backdropBlur)
        #[arg(short, long)]
        section: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where a configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Builtin => write!(f, "<built-in>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve the configuration the global options point at.
///
/// With `validate` set, a file that fails validation is an error; without
/// it the file is only parsed.
pub(crate) fn resolve_config(
    global: &GlobalArgs,
    validate: bool,
) -> Result<(TailwindConfig, Source), ConfigError> {
    let path = if global.builtin {
        None
    } else {
        global.config.clone().or_else(config::find_config)
    };

    match path {
        Some(path) => {
            let config = if validate {
                config::load_config_file(&path)?
            } else {
                config::read_config_file(&path)?
            };
            Ok((config, Source::File(path)))
        }
        None => {
            tracing::debug!("using built-in configuration");
            Ok((config::load(), Source::Builtin))
        }
    }
}

/// Output path and format for the write command.
///
/// Without a path the file is named after the format. With one, its
/// extension decides the format and must agree with an explicit `format`.
pub(crate) fn output_target(
    output: Option<&Path>,
    format: Option<ConfigFormat>,
) -> Result<(PathBuf, ConfigFormat), String> {
    let Some(path) = output else {
        let format = format.unwrap_or(ConfigFormat::Js);
        return Ok((PathBuf::from(format!("tailwind.config.{}", format.extension())), format));
    };

    let detected = ConfigFormat::from_path(path).map_err(|_| {
        format!(
            "Cannot tell the format of '{}' (expected .js, .cjs, .mjs, .json, .json5 or .toml)",
            path.display()
        )
    })?;
    match format {
        Some(format) if format != detected => Err(format!(
            "'{}' has a .{} extension but --format {} was given",
            path.display(),
            detected.extension(),
            format.extension()
        )),
        _ => Ok((path.to_path_buf(), detected)),
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match cli.command {
        Commands::Show { format, content, plugins } => {
            show::run_show(&cli.global, format, content, plugins)
        }
        Commands::Write { output, format, force, content, plugins } => {
            show::run_write(&cli.global, output.as_deref(), format, force, content, plugins)
        }
        Commands::Validate { strict, json } => validate::run_validate(&cli.global, strict, json),
        Commands::Tokens { section, json } => {
            tokens::run_tokens(&cli.global, section.as_deref(), json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_after_subcommand() {
        let cli = Cli::try_parse_from(["twc", "show", "--builtin", "-vv", "-f", "json"]).unwrap();
        assert!(cli.global.builtin);
        assert_eq!(cli.global.verbose, 2);
        assert!(matches!(cli.command, Commands::Show { format: ConfigFormat::Json, .. }));
    }

    #[test]
    fn test_config_conflicts_with_builtin() {
        let result = Cli::try_parse_from(["twc", "--builtin", "--config", "a.js", "show"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_builtin() {
        let global = GlobalArgs { builtin: true, ..Default::default() };
        let (config, source) = resolve_config(&global, true).unwrap();
        assert_eq!(config, config::load());
        assert_eq!(source, Source::Builtin);
        assert_eq!(source.to_string(), "<built-in>");
    }

    #[test]
    fn test_resolve_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "content = [\"./app/**/*.rs\"]\n").unwrap();

        let global = GlobalArgs { config: Some(path.clone()), ..Default::default() };
        let (config, source) = resolve_config(&global, true).unwrap();
        assert_eq!(config.content, vec!["./app/**/*.rs"]);
        assert_eq!(source, Source::File(path));
    }

    #[test]
    fn test_resolve_without_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tailwind.config.json");
        fs::write(&path, r#"{"content": ["[oops"]}"#).unwrap();

        let global = GlobalArgs { config: Some(path), ..Default::default() };
        assert!(resolve_config(&global, false).is_ok());
        assert!(matches!(resolve_config(&global, true), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_output_target_defaults() {
        assert_eq!(
            output_target(None, None).unwrap(),
            (PathBuf::from("tailwind.config.js"), ConfigFormat::Js)
        );
        assert_eq!(
            output_target(None, Some(ConfigFormat::Toml)).unwrap(),
            (PathBuf::from("tailwind.config.toml"), ConfigFormat::Toml)
        );
    }

    #[test]
    fn test_output_target_from_extension() {
        let (path, format) = output_target(Some(Path::new("tw.toml")), None).unwrap();
        assert_eq!(path, PathBuf::from("tw.toml"));
        assert_eq!(format, ConfigFormat::Toml);

        let (_, format) = output_target(Some(Path::new("a.cjs")), Some(ConfigFormat::Js)).unwrap();
        assert_eq!(format, ConfigFormat::Js);
    }

    #[test]
    fn test_output_target_mismatch() {
        assert!(output_target(Some(Path::new("tw.toml")), Some(ConfigFormat::Json)).is_err());
        assert!(output_target(Some(Path::new("tailwind.config.js")), Some(ConfigFormat::Toml))
            .is_err());
        assert!(output_target(Some(Path::new("tw")), None).is_err());
        assert!(output_target(Some(Path::new("tw.yaml")), Some(ConfigFormat::Js)).is_err());
    }

    #[test]
    fn test_parse_write_without_output() {
        let cli = Cli::try_parse_from(["twc", "write", "-f", "toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Write { output: None, format: Some(ConfigFormat::Toml), .. }
        ));
    }
}

//! Configuration loading and discovery for `tailwind.config.*`
//!
//! Provides functions to find, parse, load, and merge configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::ValueEnum;
use regex::Regex;
use thiserror::Error;

use super::builtin;
use super::schema::TailwindConfig;
use super::validate::Severity;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON5 parsing error (also used for JS object literals)
    #[error("Failed to parse config: {0}")]
    Json5(#[from] json5::Error),
    /// File extension not recognized
    #[error("Unsupported config format '{0}', expected js, cjs, mjs, json, json5 or toml")]
    UnsupportedFormat(String),
    /// JS file without a `module.exports = {...}` / `export default {...}` literal
    #[error("No exported object literal found in {0}")]
    NotAnObjectLiteral(String),
    /// Built-in pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(regex::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// CommonJS / ES module exporting an object literal
    Js,
    Json,
    Json5,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "js" | "cjs" | "mjs" => Ok(ConfigFormat::Js),
            "json" => Ok(ConfigFormat::Json),
            "json5" => Ok(ConfigFormat::Json5),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Js => "js",
            ConfigFormat::Json => "json",
            ConfigFormat::Json5 => "json5",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// File names searched for, in priority order
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.json",
    "tailwind.config.json5",
    "tailwind.config.toml",
];

/// CLI arguments that can extend config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Extra content globs
    pub content: Vec<String>,
    /// Extra plugin specifiers
    pub plugins: Vec<String>,
}

/// Find a config file by walking up from the current working directory.
///
/// # Returns
/// - `Some(path)` if a `tailwind.config.*` file is found
/// - `None` if no config file is found
pub fn find_config() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_config_from(cwd)
}

/// Find a config file by walking up from a specific directory.
///
/// Within one directory the first name of [`CONFIG_FILE_NAMES`] that exists
/// wins.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config()`] to locate a config file. If none is found, returns the
/// built-in configuration.
///
/// # Example
/// ```ignore
/// // Load from discovered config, or the built-in one
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("web/tailwind.config.js")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<TailwindConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            tracing::debug!("no config file found, using built-in configuration");
            Ok(builtin::load())
        }
    }
}

/// Load and validate configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<TailwindConfig, ConfigError> {
    let config = read_config_file(path)?;

    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        tracing::warn!(path = %path.display(), "{}", issue);
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(config)
}

/// Read and parse a config file without validating it.
pub fn read_config_file(path: &Path) -> Result<TailwindConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    tracing::info!(path = %path.display(), ?format, "loading config");

    let contents = fs::read_to_string(path)?;
    parse_config(&contents, format).map_err(|e| match e {
        ConfigError::NotAnObjectLiteral(_) => {
            ConfigError::NotAnObjectLiteral(path.display().to_string())
        }
        other => other,
    })
}

/// Parse configuration text in the given format. Does not validate.
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<TailwindConfig, ConfigError> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(text)?,
        ConfigFormat::Json => serde_json::from_str(text)?,
        ConfigFormat::Json5 => json5::from_str(text)?,
        ConfigFormat::Js => json5::from_str(&js_object_literal(text)?)?,
    };
    Ok(config)
}

/// Matches a `require(...)` call on a single string literal, escapes allowed
const REQUIRE_PATTERN: &str =
    r#"^require\s*\(\s*('(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*")\s*\)"#;

fn require_regex() -> Result<&'static Regex, ConfigError> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REQUIRE_PATTERN))
        .as_ref()
        .map_err(|e| ConfigError::Pattern(e.clone()))
}

/// Lexical context of a position in JS source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    LineComment,
    BlockComment,
    Str(u8),
}

/// Advance one step from byte `i`, returning the context after the step and
/// the next position. Only ASCII delimiters are inspected, so callers must
/// slice `text` only at positions holding an ASCII byte.
fn step(bytes: &[u8], i: usize, state: Lexeme) -> (Lexeme, usize) {
    let next = bytes.get(i + 1).copied();
    let advanced = match state {
        Lexeme::Code => match (bytes[i], next) {
            (b'/', Some(b'/')) => (Lexeme::LineComment, i + 2),
            (b'/', Some(b'*')) => (Lexeme::BlockComment, i + 2),
            (q @ (b'\'' | b'"' | b'`'), _) => (Lexeme::Str(q), i + 1),
            _ => (Lexeme::Code, i + 1),
        },
        Lexeme::LineComment if bytes[i] == b'\n' => (Lexeme::Code, i + 1),
        Lexeme::LineComment => (state, i + 1),
        Lexeme::BlockComment if bytes[i] == b'*' && next == Some(b'/') => (Lexeme::Code, i + 2),
        Lexeme::BlockComment => (state, i + 1),
        Lexeme::Str(_) if bytes[i] == b'\\' => (state, i + 2),
        Lexeme::Str(q) if bytes[i] == q => (Lexeme::Code, i + 1),
        Lexeme::Str(_) => (state, i + 1),
    };
    (advanced.0, advanced.1.min(bytes.len()))
}

/// Position just past the first export marker that appears in code
fn find_export(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let (mut i, mut state) = (0, Lexeme::Code);
    while i < bytes.len() {
        if state == Lexeme::Code {
            for marker in ["module.exports", "export default"] {
                if bytes[i..].starts_with(marker.as_bytes()) {
                    return Some(i + marker.len());
                }
            }
        }
        (state, i) = step(bytes, i, state);
    }
    None
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'.'
}

/// Extract the exported object literal of a JS config as JSON5 text.
///
/// Handles `module.exports = {...}` and `export default {...}`, ignoring
/// markers inside comments and strings. The literal ends at its matching
/// closing brace. Plugin `require('name')` calls outside strings become the
/// string `'name'`; anything else that is not plain data fails to parse later.
fn js_object_literal(text: &str) -> Result<String, ConfigError> {
    let not_literal = || ConfigError::NotAnObjectLiteral("<input>".to_string());
    let start = find_export(text).ok_or_else(not_literal)?;

    let after = text[start..].trim_start();
    let after = after.strip_prefix('=').unwrap_or(after).trim_start();
    if !after.starts_with('{') {
        return Err(not_literal());
    }
    let open = text.len() - after.len();

    let require = require_regex()?;
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(after.len());
    let (mut i, mut copied, mut depth, mut state) = (open, open, 0usize, Lexeme::Code);

    while i < bytes.len() {
        if state == Lexeme::Code {
            match bytes[i] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push_str(&text[copied..=i]);
                        return Ok(out);
                    }
                }
                b'r' if i == 0 || !is_ident_byte(bytes[i - 1]) => {
                    if let Some(caps) = require.captures(&text[i..]) {
                        if let (Some(call), Some(literal)) = (caps.get(0), caps.get(1)) {
                            out.push_str(&text[copied..i]);
                            out.push_str(literal.as_str());
                            i += call.end();
                            copied = i;
                            continue;
                        }
                    }
                }
                _ => {}
            }
        }
        (state, i) = step(bytes, i, state);
    }

    Err(not_literal())
}

/// Merge CLI overrides into a configuration.
///
/// Extra content patterns and plugins are appended after the configured
/// ones; entries already present are skipped.
pub fn merge_cli_overrides(config: &mut TailwindConfig, overrides: &CliOverrides) {
    for pattern in &overrides.content {
        if !config.content.contains(pattern) {
            config.content.push(pattern.clone());
        }
    }

    for plugin in &overrides.plugins {
        if !config.plugins.contains(plugin) {
            config.plugins.push(plugin.clone());
        }
    }
}

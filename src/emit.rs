//! Rendering a configuration to the file formats the build tool reads
//!
//! Every format produced here parses back through
//! [`crate::config::parse_config`] to an equal configuration.

use std::fmt::Write;

use thiserror::Error;

use crate::config::{
    ConfigFormat, TailwindConfig, TokenMap, BACKDROP_BLUR_SECTION, COLORS_SECTION,
};

/// Error type for emission failures
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to serialize TOML: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to serialize JSON5: {0}")]
    Json5(#[from] json5::Error),
}

/// Type annotation comment the build tool's editor integration picks up
pub const JS_HEADER: &str = "/** @type {import('tailwindcss').Config} */";

const INDENT: &str = "  ";

/// Render a configuration in the given format.
///
/// The output always ends with a newline.
pub fn render(config: &TailwindConfig, format: ConfigFormat) -> Result<String, EmitError> {
    let mut out = match format {
        ConfigFormat::Js => render_js(config),
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Json5 => json5::to_string(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Render as a CommonJS module exporting an object literal.
///
/// ```
/// let js = twconfig::emit::render_js(&twconfig::config::load());
/// assert!(js.contains("'primary-start': '#667eea',"));
/// assert!(js.contains("backdropBlur: {"));
/// assert!(js.contains("plugins: [],"));
/// ```
pub fn render_js(config: &TailwindConfig) -> String {
    let mut out = String::new();
    out.push_str(JS_HEADER);
    out.push_str("\nmodule.exports = {\n");

    let content: Vec<String> = config.content.iter().map(|p| double_quoted(p)).collect();
    write_array(&mut out, 1, "content", &content);

    line(&mut out, 1, "theme: {");
    line(&mut out, 2, "extend: {");
    for (section, tokens) in config.sections() {
        // empty colors/backdropBlur are left out, they parse back as empty anyway
        if tokens.is_empty() && is_fixed_section(section) {
            continue;
        }
        write_token_map(&mut out, 3, section, tokens);
    }
    line(&mut out, 2, "},");
    line(&mut out, 1, "},");

    let plugins: Vec<String> =
        config.plugins.iter().map(|p| format!("require({})", single_quoted(p))).collect();
    write_array(&mut out, 1, "plugins", &plugins);

    out.push_str("}\n");
    out
}

fn is_fixed_section(section: &str) -> bool {
    section == COLORS_SECTION || section == BACKDROP_BLUR_SECTION
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn write_array(out: &mut String, depth: usize, key: &str, items: &[String]) {
    if items.is_empty() {
        line(out, depth, &format!("{}: [],", js_key(key)));
        return;
    }
    line(out, depth, &format!("{}: [", js_key(key)));
    for item in items {
        line(out, depth + 1, &format!("{},", item));
    }
    line(out, depth, "],");
}

fn write_token_map(out: &mut String, depth: usize, key: &str, tokens: &TokenMap) {
    if tokens.is_empty() {
        line(out, depth, &format!("{}: {{}},", js_key(key)));
        return;
    }
    line(out, depth, &format!("{}: {{", js_key(key)));
    for (name, value) in tokens {
        line(out, depth + 1, &format!("{}: {},", js_key(name), single_quoted(value)));
    }
    line(out, depth, "},");
}

/// Object key: bare when it is a plain identifier, single-quoted otherwise
fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if is_ident {
        key.to_string()
    } else {
        single_quoted(key)
    }
}

fn single_quoted(s: &str) -> String {
    quoted(s, '\'')
}

fn double_quoted(s: &str) -> String {
    quoted(s, '"')
}

fn quoted(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

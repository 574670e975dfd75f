//! Validation of configuration values
//!
//! Validation is opt-in: the built-in configuration is never validated on
//! load, but configurations read from disk are.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::schema::{TailwindConfig, BACKDROP_BLUR_SECTION, COLORS_SECTION};
use crate::color::{is_hex6, parse_color};
use crate::length::parse_length;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Build tool would reject or misread the value
    Error,
    /// Accepted, but probably not what was meant
    Warning,
}

/// A single problem found in a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Path to the offending field (e.g. "theme.extend.colors.primary-start")
    pub field: String,
    /// Human readable description
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), severity: Severity::Error }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), severity: Severity::Warning }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: '{}' {}", level, self.field, self.message)
    }
}

/// Whether any issue should fail a build. In strict mode warnings count too.
pub fn has_errors(issues: &[ValidationIssue], strict: bool) -> bool {
    issues.iter().any(|i| strict || i.severity == Severity::Error)
}

/// CSS-wide keywords valid wherever a color is
const COLOR_KEYWORDS: [&str; 6] =
    ["currentcolor", "inherit", "initial", "unset", "revert", "revert-layer"];

/// Colors that can only be resolved at use site: keywords, custom
/// properties, and the build tool's `<alpha-value>` placeholder.
fn is_deferred_color(value: &str) -> bool {
    let trimmed = value.trim();
    COLOR_KEYWORDS.iter().any(|k| trimmed.eq_ignore_ascii_case(k))
        || trimmed.contains("var(")
        || trimmed.contains("<alpha-value>")
}

impl TailwindConfig {
    /// Validate the configuration and return every issue found
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        self.validate_content(&mut issues);
        self.validate_colors(&mut issues);
        self.validate_backdrop_blur(&mut issues);
        self.validate_extra(&mut issues);
        self.validate_plugins(&mut issues);

        issues
    }

    /// Check if validation found no errors (warnings allowed)
    pub fn is_valid(&self) -> bool {
        !has_errors(&self.validate(), false)
    }

    fn validate_content(&self, issues: &mut Vec<ValidationIssue>) {
        if self.content.is_empty() {
            issues.push(ValidationIssue::warning(
                "content",
                "is empty, no source files will be scanned for classes",
            ));
        }

        for (i, pattern) in self.content.iter().enumerate() {
            let field = format!("content[{}]", i);
            if pattern.trim().is_empty() {
                issues.push(ValidationIssue::error(field, "must be a non-empty glob pattern"));
            } else if let Err(e) = glob::Pattern::new(pattern) {
                issues.push(ValidationIssue::error(field, format!("invalid glob: {}", e)));
            }
        }
    }

    fn validate_colors(&self, issues: &mut Vec<ValidationIssue>) {
        for (name, value) in &self.theme.extend.colors {
            let field = format!("theme.extend.{}.{}", COLORS_SECTION, name);
            if name.is_empty() {
                issues.push(ValidationIssue::error(field, "token name must be non-empty"));
                continue;
            }
            if is_deferred_color(value) {
                tracing::debug!(token = %name, value = %value, "color resolved by the browser");
                continue;
            }
            match parse_color(value) {
                Ok(_) if !value.starts_with('#') => issues.push(ValidationIssue::warning(
                    field,
                    format!("'{}' is not a hex color, opacity modifiers may not apply", value),
                )),
                Ok(_) => {
                    if !is_hex6(value) {
                        tracing::debug!(token = %name, value = %value, "short or alpha hex color");
                    }
                }
                Err(e) => issues.push(ValidationIssue::error(field, e.to_string())),
            }
        }
    }

    fn validate_backdrop_blur(&self, issues: &mut Vec<ValidationIssue>) {
        for (name, value) in &self.theme.extend.backdrop_blur {
            let field = format!("theme.extend.{}.{}", BACKDROP_BLUR_SECTION, name);
            if name.is_empty() {
                issues.push(ValidationIssue::error(field, "token name must be non-empty"));
            } else if let Err(e) = parse_length(value) {
                issues.push(ValidationIssue::error(field, e.to_string()));
            }
        }
    }

    fn validate_extra(&self, issues: &mut Vec<ValidationIssue>) {
        for (section, tokens) in &self.theme.extend.extra {
            for name in tokens.keys().filter(|n| n.is_empty()) {
                issues.push(ValidationIssue::error(
                    format!("theme.extend.{}.{}", section, name),
                    "token name must be non-empty",
                ));
            }
        }
    }

    fn validate_plugins(&self, issues: &mut Vec<ValidationIssue>) {
        let mut seen = HashSet::new();
        for (i, plugin) in self.plugins.iter().enumerate() {
            let field = format!("plugins[{}]", i);
            if plugin.trim().is_empty() {
                issues.push(ValidationIssue::error(field, "must be a non-empty module specifier"));
            } else if !seen.insert(plugin.as_str()) {
                issues.push(ValidationIssue::warning(field, format!("'{}' is listed twice", plugin)));
            }
        }
    }
}

//! The project's built-in configuration
//!
//! Used when no `tailwind.config.*` file is present, and as the source
//! written out by `twc write`.

use super::schema::{TailwindConfig, ThemeConfig, ThemeExtension};

/// Files scanned for class usage
pub const CONTENT: [&str; 2] = ["./index.html", "./src/**/*.rs"];

/// Gradient colors, grouped by naming convention into start/end pairs
pub const COLORS: [(&str, &str); 10] = [
    ("primary-start", "#667eea"),
    ("primary-end", "#764ba2"),
    ("button-red-start", "#ff6b6b"),
    ("button-red-end", "#ee5a52"),
    ("button-blue-start", "#4f46e5"),
    ("button-blue-end", "#6366f1"),
    ("button-green-start", "#10b981"),
    ("button-green-end", "#059669"),
    ("button-orange-start", "#f59e0b"),
    ("button-orange-end", "#f97316"),
];

pub const BACKDROP_BLUR: [(&str, &str); 1] = [("xs", "2px")];

/// Build the built-in configuration.
///
/// Takes no input and cannot fail; every call returns an equal value.
///
/// # Example
/// ```
/// let config = twconfig::config::load();
/// assert_eq!(config.color("primary-start"), Some("#667eea"));
/// assert_eq!(config.content[1], "./src/**/*.rs");
/// ```
pub fn load() -> TailwindConfig {
    TailwindConfig {
        content: CONTENT.iter().map(|s| s.to_string()).collect(),
        theme: ThemeConfig {
            extend: ThemeExtension {
                colors: COLORS.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
                backdrop_blur: BACKDROP_BLUR
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                extra: Default::default(),
            },
        },
        plugins: Vec::new(),
    }
}

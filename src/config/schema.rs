//! Configuration schema types for `tailwind.config.*`
//!
//! Defines the structure of the utility-CSS build configuration. Field names
//! serialize exactly as the build tool expects them (`backdropBlur`, not
//! `backdrop_blur`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered name -> value mapping for one token section
pub type TokenMap = IndexMap<String, String>;

/// Additive token sections layered on top of the build tool's defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    /// Named colors (e.g. `primary-start` -> `#667eea`)
    #[serde(default)]
    pub colors: TokenMap,
    /// Named backdrop blur lengths (e.g. `xs` -> `2px`)
    #[serde(default)]
    pub backdrop_blur: TokenMap,
    /// Any other token section (`spacing`, `fontFamily`, ...), kept verbatim
    #[serde(flatten)]
    pub extra: IndexMap<String, TokenMap>,
}

/// Theme section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Extensions to the default theme
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// Complete utility-CSS build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TailwindConfig {
    /// Glob patterns of files scanned for class usage
    #[serde(default)]
    pub content: Vec<String>,
    /// Theme tokens
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Plugin module specifiers
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// Section name of the color tokens
pub const COLORS_SECTION: &str = "colors";
/// Section name of the backdrop blur tokens
pub const BACKDROP_BLUR_SECTION: &str = "backdropBlur";

/// A single named design value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// Section the token belongs to (`colors`, `backdropBlur`, ...)
    pub section: &'a str,
    /// Token name
    pub name: &'a str,
    /// Token value as written in the configuration
    pub value: &'a str,
}

impl TailwindConfig {
    /// Look up a color token by name
    pub fn color(&self, name: &str) -> Option<&str> {
        self.theme.extend.colors.get(name).map(String::as_str)
    }

    /// Look up a backdrop blur token by name
    pub fn backdrop_blur(&self, name: &str) -> Option<&str> {
        self.theme.extend.backdrop_blur.get(name).map(String::as_str)
    }

    /// All token sections in declaration order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &TokenMap)> {
        let extend = &self.theme.extend;
        let fixed: [(&str, &TokenMap); 2] =
            [(COLORS_SECTION, &extend.colors), (BACKDROP_BLUR_SECTION, &extend.backdrop_blur)];
        fixed
            .into_iter()
            .chain(extend.extra.iter().map(|(name, map)| (name.as_str(), map)))
    }

    /// Iterate every token, section by section
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> {
        self.sections().flat_map(|(section, map)| {
            map.iter().map(move |(name, value)| Token {
                section,
                name: name.as_str(),
                value: value.as_str(),
            })
        })
    }

    /// Tokens of a single section, or `None` if the section does not exist
    pub fn section(&self, name: &str) -> Option<&TokenMap> {
        self.sections().find(|(section, _)| *section == name).map(|(_, map)| map)
    }
}

//! Breadcrumb presentation options.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// CSS `text-transform` keyword applied to the breadcrumb list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCasing {
    None,
    #[default]
    Capitalize,
    Uppercase,
    Lowercase,
    FullWidth,
    FullSizeKana,
    MathAuto,
    // CSS-wide keywords
    Inherit,
    Initial,
    Unset,
    Revert,
    RevertLayer,
}

impl TextCasing {
    /// CSS keyword for the `text-transform` property.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Capitalize => "capitalize",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::FullWidth => "full-width",
            Self::FullSizeKana => "full-size-kana",
            Self::MathAuto => "math-auto",
            Self::Inherit => "inherit",
            Self::Initial => "initial",
            Self::Unset => "unset",
            Self::Revert => "revert",
            Self::RevertLayer => "revert-layer",
        }
    }
}

impl fmt::Display for TextCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for TextCasing {
    type Err = ParseCasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "capitalize" => Ok(Self::Capitalize),
            "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            "full-width" => Ok(Self::FullWidth),
            "full-size-kana" => Ok(Self::FullSizeKana),
            "math-auto" => Ok(Self::MathAuto),
            "inherit" => Ok(Self::Inherit),
            "initial" => Ok(Self::Initial),
            "unset" => Ok(Self::Unset),
            "revert" => Ok(Self::Revert),
            "revert-layer" => Ok(Self::RevertLayer),
            other => Err(ParseCasingError(other.to_owned())),
        }
    }
}

/// Unknown `text-transform` keyword.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "unknown casing '{0}' (expected none, capitalize, uppercase, lowercase, full-width, full-size-kana, math-auto, inherit, initial, unset, revert or revert-layer)"
)]
pub struct ParseCasingError(String);

/// Breadcrumb configuration (`[breadcrumb]` table).
///
/// Every option is independently overridable; missing keys fall back to
/// [`BreadcrumbConfig::default`]. The camelCase spellings used by existing
/// site configurations (`showHome`, `homeText`, `linkColor`) are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Render the Home entry on the home page itself.
    #[serde(alias = "showHome")]
    pub show_home: bool,
    /// Label of the Home entry.
    #[serde(alias = "homeText")]
    pub home_text: String,
    /// Markup inserted after every link entry.
    ///
    /// Emitted verbatim, so HTML entities such as `&rsaquo;` work.
    pub separator: String,
    /// Display casing of the whole trail.
    pub casing: TextCasing,
    /// CSS color used inline on link entries.
    #[serde(alias = "linkColor")]
    pub link_color: String,
    /// Size keyword exposed as the `breadcrumb--<size>` class.
    pub size: String,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            show_home: false,
            home_text: "Home".to_owned(),
            separator: " &rsaquo; ".to_owned(),
            casing: TextCasing::Capitalize,
            link_color: "var(--theme-color, #42b983)".to_owned(),
            size: "small".to_owned(),
        }
    }
}

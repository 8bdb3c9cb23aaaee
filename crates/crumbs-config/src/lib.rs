//! Configuration management for crumbs.
//!
//! Parses `crumbs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Breadcrumb options
//! live in the `[breadcrumb]` table:
//!
//! ```toml
//! [breadcrumb]
//! show_home = true
//! home_text = "Docs"
//! separator = " / "
//! casing = "uppercase"
//! link_color = "${BRAND_COLOR:-#42b983}"
//! size = "large"
//! ```
//!
//! Unknown tables and keys are ignored. CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String options support `${VAR}` (errors if unset) and `${VAR:-default}`.
//!
//! Expanded fields:
//! - `breadcrumb.home_text`
//! - `breadcrumb.separator`
//! - `breadcrumb.link_color`
//! - `breadcrumb.size`

mod breadcrumb;
mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use breadcrumb::{BreadcrumbConfig, ParseCasingError, TextCasing};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "crumbs.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override `breadcrumb.show_home`.
    pub show_home: Option<bool>,
    /// Override `breadcrumb.home_text`.
    pub home_text: Option<String>,
    /// Override `breadcrumb.separator`.
    pub separator: Option<String>,
    /// Override `breadcrumb.casing`.
    pub casing: Option<TextCasing>,
    /// Override `breadcrumb.link_color`.
    pub link_color: Option<String>,
    /// Override `breadcrumb.size`.
    pub size: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Breadcrumb rendering options.
    pub breadcrumb: BreadcrumbConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`breadcrumb.link_color`").
        field: String,
        /// Error message (e.g., "${`BRAND_COLOR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `crumbs.toml` in current directory and parents,
    /// falling back to built-in defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values. The merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_from(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Self::default()
            }
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let crumb = &mut self.breadcrumb;
        if let Some(show_home) = settings.show_home {
            crumb.show_home = show_home;
        }
        if let Some(home_text) = &settings.home_text {
            crumb.home_text.clone_from(home_text);
        }
        if let Some(separator) = &settings.separator {
            crumb.separator.clone_from(separator);
        }
        if let Some(casing) = settings.casing {
            crumb.casing = casing;
        }
        if let Some(link_color) = &settings.link_color {
            crumb.link_color.clone_from(link_color);
        }
        if let Some(size) = &settings.size {
            crumb.size.clone_from(size);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let crumb = &self.breadcrumb;
        require_non_empty(&crumb.home_text, "breadcrumb.home_text")?;
        require_non_empty(&crumb.link_color, "breadcrumb.link_color")?;
        require_non_empty(&crumb.size, "breadcrumb.size")?;

        // Size ends up as a class name suffix
        if !crumb
            .size
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::Validation(format!(
                "breadcrumb.size must only contain letters, digits, '-' or '_', got {:?}",
                crumb.size
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let crumb = &mut self.breadcrumb;
        crumb.home_text = expand::expand_env(&crumb.home_text, "breadcrumb.home_text")?;
        crumb.separator = expand::expand_env(&crumb.separator, "breadcrumb.separator")?;
        crumb.link_color = expand::expand_env(&crumb.link_color, "breadcrumb.link_color")?;
        crumb.size = expand::expand_env(&crumb.size, "breadcrumb.size")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        let crumb = &config.breadcrumb;
        assert!(!crumb.show_home);
        assert_eq!(crumb.home_text, "Home");
        assert_eq!(crumb.separator, " &rsaquo; ");
        assert_eq!(crumb.casing, TextCasing::Capitalize);
        assert_eq!(crumb.link_color, "var(--theme-color, #42b983)");
        assert_eq!(crumb.size, "small");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.breadcrumb, BreadcrumbConfig::default());
    }

    #[test]
    fn test_parse_breadcrumb_section() {
        let toml = r#"
[breadcrumb]
show_home = true
home_text = "Docs"
separator = " / "
casing = "uppercase"
link_color = "rebeccapurple"
size = "large"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.breadcrumb,
            BreadcrumbConfig {
                show_home: true,
                home_text: "Docs".to_owned(),
                separator: " / ".to_owned(),
                casing: TextCasing::Uppercase,
                link_color: "rebeccapurple".to_owned(),
                size: "large".to_owned(),
            }
        );
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml = r#"
[breadcrumb]
home_text = "Start"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.breadcrumb.home_text, "Start");
        assert_eq!(config.breadcrumb.size, "small");
        assert!(!config.breadcrumb.show_home);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let toml = r#"
[breadcrumb]
size = "medium"
animate = true

[search]
placeholder = "Type to search"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.breadcrumb.size, "medium");
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[breadcrumb]\nshow_home = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert!(config.breadcrumb.show_home);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[breadcrumb\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CRUMBS_TEST_LOAD_COLOR", "teal");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[breadcrumb]\nlink_color = \"${CRUMBS_TEST_LOAD_COLOR}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.breadcrumb.link_color, "teal");
        unsafe {
            std::env::remove_var("CRUMBS_TEST_LOAD_COLOR");
        }
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();

        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_prefers_nearest_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();

        assert_eq!(found, nested.join(CONFIG_FILENAME));
    }

    #[test]
    fn test_apply_cli_settings_overrides_file_values() {
        let mut config: Config = toml::from_str("[breadcrumb]\nhome_text = \"Docs\"\n").unwrap();
        let overrides = CliSettings {
            home_text: Some("Index".to_owned()),
            casing: Some(TextCasing::Lowercase),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.breadcrumb.home_text, "Index");
        assert_eq!(config.breadcrumb.casing, TextCasing::Lowercase);
        assert_eq!(config.breadcrumb.size, "small"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_all() {
        let mut config = Config::default();
        let overrides = CliSettings {
            show_home: Some(true),
            home_text: Some("Root".to_owned()),
            separator: Some(" | ".to_owned()),
            casing: Some(TextCasing::None),
            link_color: Some("red".to_owned()),
            size: Some("large".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.breadcrumb,
            BreadcrumbConfig {
                show_home: true,
                home_text: "Root".to_owned(),
                separator: " | ".to_owned(),
                casing: TextCasing::None,
                link_color: "red".to_owned(),
                size: "large".to_owned(),
            }
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.breadcrumb, BreadcrumbConfig::default());
    }

    // Validation tests

    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_home_text_empty() {
        let mut config = Config::default();
        config.breadcrumb.home_text = String::new();
        assert_validation_error(&config, &["home_text", "empty"]);
    }

    #[test]
    fn test_validate_link_color_empty() {
        let mut config = Config::default();
        config.breadcrumb.link_color = String::new();
        assert_validation_error(&config, &["link_color", "empty"]);
    }

    #[test]
    fn test_validate_size_rejects_markup() {
        let mut config = Config::default();
        config.breadcrumb.size = "small\" onclick=\"x".to_owned();
        assert_validation_error(&config, &["breadcrumb.size"]);
    }

    #[test]
    fn test_validate_empty_separator_allowed() {
        let mut config = Config::default();
        config.breadcrumb.separator = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            size: Some("x y".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }
}

//! Header configuration
//!
//! Read from `<config_dir>/heronav/header.yaml` or an explicit `.json`/`.yaml`
//! path. Every field has a default reproducing the stock header.

use crate::elevation::ElevationPolicy;
use crate::error::CoreError;
use crate::menu::{builtin_entries, MenuEntry, MenuModel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Width (px) at and above which the horizontal menu is shown
pub const DEFAULT_BREAKPOINT_PX: u32 = 1024;

/// Visual weight of a call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    Outline,
    #[default]
    Solid,
}

/// Call-to-action link shown after the menu ("Login", "Sign Up")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub variant: ActionVariant,
}

impl ActionLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>, variant: ActionVariant) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            variant,
        }
    }
}

/// Logo link back to the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeLink {
    pub href: String,
    /// Accessible label (the logo itself carries no text)
    pub label: String,
}

impl Default for HomeLink {
    fn default() -> Self {
        Self {
            href: "/".to_string(),
            label: "home".to_string(),
        }
    }
}

/// On-disk header configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub menu: Vec<MenuEntry>,
    pub actions: Vec<ActionLink>,
    pub home: HomeLink,
    pub elevation: ElevationPolicy,
    pub breakpoint_px: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            menu: builtin_entries(),
            actions: default_actions(),
            home: HomeLink::default(),
            elevation: ElevationPolicy::default(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

fn default_actions() -> Vec<ActionLink> {
    vec![
        ActionLink::new("Login", "#", ActionVariant::Outline),
        ActionLink::new("Sign Up", "#", ActionVariant::Solid),
    ]
}

/// Validated, immutable header content consumed by the view
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderContent {
    pub menu: MenuModel,
    pub actions: Vec<ActionLink>,
    pub home: HomeLink,
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            menu: MenuModel::builtin(),
            actions: default_actions(),
            home: HomeLink::default(),
        }
    }
}

impl HeaderConfig {
    /// Default location: `<config_dir>/heronav/header.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("heronav").join("header.yaml"))
    }

    /// Load and validate a config file (format chosen by extension)
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let config: HeaderConfig = match extension.as_deref() {
            Some("json") => {
                serde_json::from_str(&content).map_err(|source| CoreError::JsonParse {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                    source,
                })?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|source| CoreError::YamlParse {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                    source,
                })?
            }
            _ => {
                return Err(CoreError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        config.validate()?;
        info!(
            path = %path.display(),
            entries = config.menu.len(),
            "Loaded header config"
        );
        Ok(config)
    }

    /// Load `path`, or the default location when `path` is `None`.
    ///
    /// A missing file at the default location yields the built-in header;
    /// a missing explicit path is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => {
                debug!("No header config found, using built-in header");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.elevation.validate()?;
        if self.breakpoint_px == 0 {
            return Err(CoreError::InvalidBreakpoint {
                breakpoint_px: self.breakpoint_px,
            });
        }
        for (i, action) in self.actions.iter().enumerate() {
            if action.label.trim().is_empty() {
                return Err(CoreError::EmptyLabel {
                    path: format!("actions[{i}]"),
                });
            }
        }
        MenuModel::try_new(self.menu.clone()).map(|_| ())
    }

    /// Build the content handed to the header view
    pub fn content(&self) -> Result<HeaderContent, CoreError> {
        Ok(HeaderContent {
            menu: MenuModel::try_new(self.menu.clone())?,
            actions: self.actions.clone(),
            home: self.home.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = HeaderConfig::default();
        config.validate().unwrap();
        assert_eq!(config.breakpoint_px, 1024);
        assert_eq!(config.actions.len(), 2);
        assert_eq!(config.content().unwrap(), HeaderContent::default());
    }

    #[test]
    fn test_load_yaml_with_partial_fields() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "header.yaml",
            r##"
menu:
  - name: About Us
    href: "#about"
    children:
      - { name: Profile, href: "#profile" }
      - { name: Awards, href: "#awards" }
  - name: Contact
    href: "#contact"
elevation:
  threshold: 0.1
"##,
        );

        let config = HeaderConfig::load(&path).unwrap();
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu[0].children.len(), 2);
        assert_eq!(config.elevation.threshold, 0.1);
        assert_eq!(config.elevation.release_band, 0.0);
        assert_eq!(config.breakpoint_px, DEFAULT_BREAKPOINT_PX);
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "header.json",
            r##"{"menu":[{"name":"Contact","href":"#contact"}],"actions":[],"breakpoint_px":768}"##,
        );

        let config = HeaderConfig::load(&path).unwrap();
        assert_eq!(config.breakpoint_px, 768);
        assert!(config.actions.is_empty());
    }

    #[test]
    fn test_load_nested_home_link() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "header.yaml",
            r#"
home:
  href: /en/
"#,
        );

        let config = HeaderConfig::load(&path).unwrap();
        assert_eq!(config.home.href, "/en/");
        assert_eq!(config.home.label, "home");
        assert_eq!(config.content().unwrap().home, config.home);

        let flat = write(&dir, "flat.json", r#"{"home_href":"/en/"}"#);
        let err = HeaderConfig::load(&flat).unwrap_err();
        assert!(matches!(err, CoreError::JsonParse { .. }));
    }

    #[test]
    fn test_grandchildren_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "header.yaml",
            r##"
menu:
  - name: A
    href: "#a"
    children:
      - name: B
        href: "#b"
        children:
          - { name: C, href: "#c" }
"##,
        );

        let err = HeaderConfig::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::YamlParse { .. }));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "header.json", r#"{"elevation":{"threshold":0}}"#);
        let err = HeaderConfig::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "header.toml", "");
        let err = HeaderConfig::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = HeaderConfig::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }
}

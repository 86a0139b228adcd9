//! Theme configuration loaded from YAML.
//!
//! Every field is optional. Missing fields keep the built-in defaults:
//!
//! ```yaml
//! # spacing unit in pixels (default 8)
//! spacing: 4
//! # min widths per tier; unlisted tiers keep their defaults
//! breakpoints:
//!   sm: 640
//!   md: 768
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::breakpoint::Breakpoint;
use super::error::ThemeError;
use super::theme::{Spacing, Theme};

/// Serializable theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Spacing unit in pixels.
    pub spacing: Option<f64>,
    /// Min widths by tier name.
    pub breakpoints: BTreeMap<String, u32>,
}

impl ThemeConfig {
    /// Parses a configuration document. An empty document is the default
    /// configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }
}

impl Theme {
    /// Builds a theme from a configuration, validating it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ldstyle::{Breakpoint, Theme};
    ///
    /// let theme = Theme::from_yaml("spacing: 4\nbreakpoints:\n  md: 768\n").unwrap();
    /// assert_eq!(theme.spacing(2.0), 8.0);
    /// assert_eq!(theme.breakpoints().value(Breakpoint::Md), 768);
    /// assert_eq!(theme.breakpoints().value(Breakpoint::Lg), 1200);
    /// ```
    pub fn from_config(config: ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Theme::new();
        if let Some(unit) = config.spacing {
            theme = theme.with_spacing(Spacing::Unit(unit));
        }
        for (name, px) in config.breakpoints {
            let breakpoint = Breakpoint::from_name(&name)
                .ok_or(ThemeError::UnknownBreakpoint { name })?;
            theme = theme.with_breakpoint(breakpoint, px);
        }
        theme.validate()?;
        Ok(theme)
    }

    /// Parses and builds a theme from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        Self::from_config(ThemeConfig::from_yaml(source)?)
    }

    /// Reads and builds a theme from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}

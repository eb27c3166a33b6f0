// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StampError;
use crate::layout::LayoutConfig;

/// Top-level configuration file.
///
/// Either section may be omitted; a caller only needs the one for the mode
/// it runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<WatermarkSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSettings>,
}

/// Watermark compositing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatermarkSettings {
    /// Overlay image stretched over every photo
    pub path: PathBuf,
}

/// Text rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    /// Template image the text is drawn on
    pub template_path: PathBuf,

    #[serde(flatten)]
    pub layout: LayoutConfig,

    /// Keys matching neither field above; `deny_unknown_fields` cannot be
    /// combined with `flatten`, so these are rejected by `validate`.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yaml::Value>,
}

impl Config {
    /// Parse and validate YAML, substituting `${VAR}` references first.
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, StampError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| StampError::config(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                StampError::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        let config: Self =
            serde_yaml::from_str(&substituted).map_err(|e| StampError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// Relative resource paths are resolved against the directory holding
    /// the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StampError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            StampError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml_with_env(&yaml)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Prefix every relative resource path with `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        if let Some(watermark) = &mut self.watermark {
            resolve(&mut watermark.path);
        }
        if let Some(text) = &mut self.text {
            resolve(&mut text.template_path);
            resolve(&mut text.layout.font_path);
        }
    }

    pub fn validate(&self) -> Result<(), StampError> {
        if let Some(watermark) = &self.watermark {
            if watermark.path.as_os_str().is_empty() {
                return Err(StampError::config("watermark.path cannot be empty"));
            }
        }

        if let Some(text) = &self.text {
            if let Some(key) = text.unknown.keys().next() {
                return Err(StampError::config(format!("Unknown key 'text.{}'", key)));
            }
            if text.template_path.as_os_str().is_empty() {
                return Err(StampError::config("text.template_path cannot be empty"));
            }
            if text.layout.font_path.as_os_str().is_empty() {
                return Err(StampError::config("text.font_path cannot be empty"));
            }
            text.layout.validate()?;
        }

        Ok(())
    }
}

//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/paysplit/paysplit.toml`
//! 3. Explicit config: `--config <file>`
//! 4. Environment variables: `PAYSPLIT_*` prefix
//!
//! Tax and partner rates, locale and currency are fixed and not configurable.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult, Labels};
use crate::domain::{coerce_amount, Adjustment};
use crate::util::path::expand_path;

/// Default flat adjustment in man-units.
pub const DEFAULT_ADJUSTMENT: f64 = 5.0;

/// Raw labels for intermediate parsing (None = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLabels {
    pub title: Option<String>,
    pub partner: Option<String>,
    pub payee: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_adjustment: Option<f64>,
    pub labels: RawLabels,
}

/// Unified configuration for paysplit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Adjustment a new session starts with, in man-units (not clamped to the slider)
    pub default_adjustment: f64,
    /// Names shown on the form
    pub labels: Labels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_adjustment: DEFAULT_ADJUSTMENT,
            labels: Labels::default(),
        }
    }
}

/// Get the XDG config directory for paysplit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "paysplit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("paysplit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_adjustment: overlay
                .default_adjustment
                .unwrap_or(self.default_adjustment),
            labels: Labels {
                title: overlay
                    .labels
                    .title
                    .clone()
                    .unwrap_or_else(|| self.labels.title.clone()),
                partner: overlay
                    .labels
                    .partner
                    .clone()
                    .unwrap_or_else(|| self.labels.partner.clone()),
                payee: overlay
                    .labels
                    .payee
                    .clone()
                    .unwrap_or_else(|| self.labels.payee.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file (`--config`); must exist if given
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_layers(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given global and explicit files plus env vars.
    pub fn load_layers(global: Option<&Path>, explicit: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, optional
        if let Some(global_path) = global {
            if global_path.exists() {
                info!("config: global {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config, required
        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            info!("config: explicit {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.sanitize();
        debug!("config: effective {:?}", current);
        Ok(current)
    }

    /// Apply PAYSPLIT_* environment variables as explicit overrides.
    ///
    /// `PAYSPLIT_DEFAULT_ADJUSTMENT` goes through numeric-field coercion,
    /// nested keys use `__` (`PAYSPLIT_LABELS__PARTNER`).
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PAYSPLIT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_adjustment") {
            settings.default_adjustment = coerce_amount(&val);
        }
        if let Ok(val) = config.get_string("labels.title") {
            settings.labels.title = val;
        }
        if let Ok(val) = config.get_string("labels.partner") {
            settings.labels.partner = val;
        }
        if let Ok(val) = config.get_string("labels.payee") {
            settings.labels.payee = val;
        }

        Ok(settings)
    }

    /// TOML allows `nan`/`inf`; the adjustment field would read those as 0.
    fn sanitize(&mut self) {
        self.default_adjustment = Adjustment::from_input(self.default_adjustment).value();
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Write the template to `path`, refusing to overwrite an existing file.
    pub fn write_template(path: &Path) -> ApplicationResult<()> {
        if path.exists() {
            return Err(ApplicationError::Config {
                message: format!("config already exists: {}", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_failed("create config dir", parent, e))?;
        }
        std::fs::write(path, Self::template()).map_err(|e| io_failed("write config", path, e))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# paysplit configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/paysplit/paysplit.toml
#   Explicit: paysplit --config <file>
#   Env:      PAYSPLIT_* environment variables (PAYSPLIT_LABELS__PARTNER, ...)
#
# Tax (10%) and partner (5%) rates are fixed.

# Flat part of the partner's share a new session starts with, in man-units (10,000 yen).
# The slider covers 0-10 in 0.5 steps; larger values are allowed here.
# default_adjustment = 5

[labels]
# title = "Calculator"
# partner = "Partner"
# payee = "Payee"
"#
        .to_string()
    }
}

fn io_failed(action: &str, path: &Path, e: std::io::Error) -> ApplicationError {
    ApplicationError::OperationFailed {
        context: format!("{}: {}", action, path.display()),
        source: Box::new(e),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

//! Configuration for the speck sugar passes and their logging.
//!
//! Configs are TOML files; every table is optional and falls back to the defaults speck
//! ships with:
//!
//! ```toml
//! [sugar]
//! specification_type = "speck.lang.Specification"
//! placeholder = "_"
//!
//! [[sugar.builtins]]
//! name = "Mock"
//! min_args = 0
//! max_args = 2
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Once;

use speck_sugar::{BuiltinMember, BuiltinMembers, PlaceholderRef};
use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

mod diagnostics;
mod validation;

pub use diagnostics::{
    ConfigDiagnostics, ConfigValidationError, ConfigWarning, ValidationDiagnostics,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeckConfig {
    #[serde(default)]
    pub sugar: SugarConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SugarConfig {
    /// Qualified name of the base type specifications extend.
    #[serde(default = "SugarConfig::default_specification_type")]
    pub specification_type: String,

    /// Static property of the specification type used as the "any value" placeholder.
    #[serde(default = "SugarConfig::default_placeholder")]
    pub placeholder: String,

    /// Helper members whose calls get expanded with an inferred type and name.
    ///
    /// Replaces the default set (`Mock`, `Stub`, `Spy`) when present.
    #[serde(default = "SugarConfig::default_builtins")]
    pub builtins: Vec<BuiltinMemberConfig>,
}

impl SugarConfig {
    fn default_specification_type() -> String {
        speck_sugar::SPECIFICATION_TYPE.to_owned()
    }

    fn default_placeholder() -> String {
        speck_sugar::PLACEHOLDER_SYMBOL.to_owned()
    }

    fn default_builtins() -> Vec<BuiltinMemberConfig> {
        BuiltinMembers::default()
            .iter()
            .map(|member| BuiltinMemberConfig {
                name: member.name.clone(),
                min_args: member.min_args,
                max_args: member.max_args,
            })
            .collect()
    }

    pub fn placeholder_ref(&self) -> PlaceholderRef {
        PlaceholderRef::new(&self.specification_type, &self.placeholder)
    }

    pub fn builtin_members(&self) -> BuiltinMembers {
        BuiltinMembers::new(
            self.builtins
                .iter()
                .map(|builtin| BuiltinMember::new(&builtin.name, builtin.min_args, builtin.max_args))
                .collect(),
        )
    }
}

impl Default for SugarConfig {
    fn default() -> Self {
        Self {
            specification_type: Self::default_specification_type(),
            placeholder: Self::default_placeholder(),
            builtins: Self::default_builtins(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinMemberConfig {
    pub name: String,

    #[serde(default)]
    pub min_args: usize,

    #[serde(default = "BuiltinMemberConfig::default_max_args")]
    pub max_args: usize,
}

impl BuiltinMemberConfig {
    fn default_max_args() -> usize {
        2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logging level for all speck crates, or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,

    /// Write logs to stderr. When disabled, events are filtered but discarded.
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            // Anything else is treated as an `EnvFilter` directive string.
            _ => trimmed.to_owned(),
        }
    }

    fn config_env_filter(&self) -> tracing_subscriber::EnvFilter {
        let directives = Self::normalize_level_directives(&self.level);
        tracing_subscriber::EnvFilter::try_new(directives).unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::default()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        })
    }

    /// The effective `EnvFilter` for speck tracing.
    ///
    /// If `RUST_LOG` is set, it is merged into the configured directives.
    pub fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        let env_directives = std::env::var("RUST_LOG")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        let config_directives = Self::normalize_level_directives(&self.level);

        match env_directives {
            Some(env_directives) => {
                let combined = format!("{config_directives},{env_directives}");
                tracing_subscriber::EnvFilter::try_new(combined)
                    .or_else(|_| tracing_subscriber::EnvFilter::try_new(env_directives))
                    .unwrap_or_else(|_| self.config_env_filter())
            }
            None => self.config_env_filter(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // The `Display` form embeds a snippet of the input; keep just the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl SpeckConfig {
    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = read_config(path.as_ref())?;
        Self::load_from_str(&text)
    }

    /// Load a config from a TOML string.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file from TOML and return diagnostics (unknown keys and semantic
    /// validation failures).
    pub fn load_from_path_with_diagnostics(
        path: impl AsRef<Path>,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let text = read_config(path.as_ref())?;
        Self::load_from_str_with_diagnostics(&text)
    }

    pub fn load_from_str_with_diagnostics(
        text: &str,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (config, unknown_keys) =
            diagnostics::deserialize_toml_with_unknown_keys::<SpeckConfig>(text)?;

        for key in &unknown_keys {
            tracing::warn!(target: "speck.config", key = %key, "ignoring unknown config key");
        }

        let mut diagnostics = ConfigDiagnostics {
            unknown_keys,
            ..ConfigDiagnostics::default()
        };
        diagnostics.extend_validation(config.validate());

        Ok((config, diagnostics))
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

static TRACING_INIT: Once = Once::new();

/// Initializes structured `tracing` logging.
///
/// Safe to call multiple times; only the first call installs a global subscriber. Returns
/// whether this call installed it.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed = false;

    TRACING_INIT.call_once(|| {
        let filter = config.env_filter();

        let make_writer = if !config.stderr {
            BoxMakeWriter::new(std::io::sink)
        } else if cfg!(debug_assertions) {
            // Keeps `cargo test` output capture working.
            BoxMakeWriter::new(tracing_subscriber::fmt::writer::TestWriter::with_stderr)
        } else {
            BoxMakeWriter::new(std::io::stderr)
        };

        let layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if config.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(make_writer)
                .with_ansi(false)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(make_writer)
                .with_ansi(false)
                .boxed()
        };

        let subscriber = tracing_subscriber::registry().with(filter).with(layer);
        installed = tracing::subscriber::set_global_default(subscriber).is_ok();
        if installed {
            tracing::debug!(
                target: "speck.config",
                level = %config.level,
                json = config.json,
                "tracing initialized"
            );
        }
    });

    installed
}

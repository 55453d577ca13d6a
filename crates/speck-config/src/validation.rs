use std::collections::HashSet;

use speck_sugar::is_identifier;

use crate::diagnostics::{ConfigValidationError, ConfigWarning, ValidationDiagnostics};
use crate::{LoggingConfig, SpeckConfig};

impl SpeckConfig {
    /// Validate semantic invariants for a configuration.
    ///
    /// Reports every problem found in one pass.
    #[must_use]
    pub fn validate(&self) -> ValidationDiagnostics {
        let mut out = ValidationDiagnostics::default();

        validate_sugar(self, &mut out);
        validate_builtins(self, &mut out);
        validate_logging(self, &mut out);

        out
    }
}

fn validate_sugar(config: &SpeckConfig, out: &mut ValidationDiagnostics) {
    // Compared verbatim against class references; whitespace is not trimmed.
    let specification_type = config.sugar.specification_type.as_str();
    if specification_type.trim().is_empty() {
        out.errors.push(ConfigValidationError::InvalidValue {
            toml_path: "sugar.specification_type".to_string(),
            message: "must not be empty".to_string(),
        });
    } else if !specification_type.split('.').all(is_identifier) {
        out.errors.push(ConfigValidationError::InvalidValue {
            toml_path: "sugar.specification_type".to_string(),
            message: "must be a qualified type name".to_string(),
        });
    }

    if !is_identifier(&config.sugar.placeholder) {
        out.errors.push(ConfigValidationError::InvalidValue {
            toml_path: "sugar.placeholder".to_string(),
            message: "must be an identifier".to_string(),
        });
    }
}

fn validate_builtins(config: &SpeckConfig, out: &mut ValidationDiagnostics) {
    if config.sugar.builtins.is_empty() {
        out.warnings.push(ConfigWarning::BuiltinsEmpty);
        return;
    }

    let mut seen = HashSet::new();
    for (idx, builtin) in config.sugar.builtins.iter().enumerate() {
        let toml_path = format!("sugar.builtins[{idx}]");

        if !is_identifier(&builtin.name) {
            out.errors.push(ConfigValidationError::InvalidValue {
                toml_path: format!("{toml_path}.name"),
                message: "must be an identifier".to_string(),
            });
        } else if !seen.insert(builtin.name.as_str()) {
            out.warnings.push(ConfigWarning::DuplicateBuiltin {
                toml_path: format!("{toml_path}.name"),
                name: builtin.name.clone(),
            });
        }

        if builtin.min_args > builtin.max_args {
            out.errors.push(ConfigValidationError::BuiltinArgumentRange {
                toml_path,
                min_args: builtin.min_args,
                max_args: builtin.max_args,
            });
        }
    }
}

fn validate_logging(config: &SpeckConfig, out: &mut ValidationDiagnostics) {
    let normalized = LoggingConfig::normalize_level_directives(&config.logging.level);
    if !config.logging.level.trim().is_empty()
        && tracing_subscriber::EnvFilter::try_new(normalized.clone()).is_err()
    {
        out.warnings.push(ConfigWarning::LoggingLevelInvalid {
            value: config.logging.level.clone(),
            normalized,
        });
    }
}

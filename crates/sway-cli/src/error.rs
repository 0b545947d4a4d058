//! Error types for swayctl

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Trace not found: {0}")]
    TraceNotFound(String),

    #[error("Trace line {line}: {source}")]
    TraceParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    #[error("Unsupported config format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] sway_motion::ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::TraceNotFound(_) | CliError::ConfigNotFound(_) => 2,
            CliError::TraceParse { .. } => 3,
            CliError::UnsupportedFormat(_)
            | CliError::InvalidConfiguration(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_) => 4,
            CliError::InvalidArgument(_) => 5,
            CliError::IoError(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::TraceNotFound("a".into()).exit_code(), 2);
        assert_eq!(
            CliError::InvalidConfiguration(sway_motion::ConfigError::MinDataCount(0)).exit_code(),
            4
        );
        assert_eq!(CliError::InvalidArgument("rate".into()).exit_code(), 5);
    }

    #[test]
    fn test_trace_parse_message_has_line() -> Result<(), Box<dyn std::error::Error>> {
        let source = match serde_json::from_str::<serde_json::Value>("{") {
            Err(e) => e,
            Ok(_) => return Err("expected a parse error".into()),
        };
        let err = CliError::TraceParse { line: 7, source };
        assert!(err.to_string().starts_with("Trace line 7:"));
        Ok(())
    }
}

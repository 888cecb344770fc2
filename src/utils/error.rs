use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule '{rule}' has an invalid pattern: {source}")]
    RulePattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule set parsing error: {message}")]
    RuleSetParse { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not write report: {0}")]
    OutputError(#[source] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Internal,
}

impl PatchError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        PatchError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PatchError::Io { .. } => ErrorCategory::Io,
            PatchError::RulePattern { .. }
            | PatchError::RuleSetParse { .. }
            | PatchError::ConfigError { .. }
            | PatchError::MissingConfigError { .. }
            | PatchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PatchError::SerializationError(_) | PatchError::OutputError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// 依錯誤類別決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Internal => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PatchError::Io { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path)
                }
                std::io::ErrorKind::InvalidData => {
                    format!("File is not valid UTF-8 text: {}", path)
                }
                _ => format!("Could not access {}: {}", path, source),
            },
            PatchError::RulePattern { rule, .. } => {
                format!("Rule '{}' could not be compiled", rule)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the target path exists and is readable and writable",
            ErrorCategory::Configuration => {
                "Fix the rule file or command line arguments and run again"
            }
            ErrorCategory::Internal => "Re-run with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;

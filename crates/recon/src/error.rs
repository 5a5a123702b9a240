use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconError {
    /// A supplied path does not resolve to a readable document.
    InputNotFound { path: String },
    /// Document is not valid JSON, or does not have the expected shape.
    MalformedInput { source: String, detail: String },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty name, bad palette colour, etc.).
    ConfigValidation(String),
    /// IO error other than a missing file (permissions, bad encoding, ...).
    Io(String),
}

impl ReconError {
    pub fn malformed(source: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            source: source.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => write!(f, "file not found: {path}"),
            Self::MalformedInput { source, detail } => {
                write!(f, "invalid JSON format in '{source}': {detail}")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}

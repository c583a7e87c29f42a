use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid flight configuration: {0}")]
    Validation(String),

    #[error("Unknown aircraft preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown key code: {0}")]
    UnknownKey(String),
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed frame on line {line}: {source}")]
    Frame {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode frame report: {0}")]
    Encode(#[source] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid document: expected a mapping at the top level")]
    InvalidDocument,

    #[error("invalid schema `{name}`: {source}")]
    InvalidSchema {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to parse spec: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

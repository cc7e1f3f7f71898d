use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlintError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("malformed weather response: {0}")]
    Weather(String),
}

pub type GlintResult<T> = std::result::Result<T, GlintError>;

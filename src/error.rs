use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed URL: {0} (expected https://github.com/<owner> or https://github.com/<owner>/<repository>)")]
    MalformedUrl(String),

    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("batch file not found: {0}")]
    BatchFileNotFound(String),

    #[error("dotenv parse error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

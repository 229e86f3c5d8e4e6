use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CLU error: {0}")]
    Clu(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn clu(msg: impl Into<String>) -> Self {
        Self::Clu(msg.into())
    }

    /// True when the failure lies with the remote service: either it could
    /// not be reached or it answered 200 with something we could not decode.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Clu(_))
    }
}

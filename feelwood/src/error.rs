use feelwood_api::ClientError;
use feelwood_infra::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeelwoodError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content client error: {0}")]
    Client(#[from] ClientError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, FeelwoodError>;

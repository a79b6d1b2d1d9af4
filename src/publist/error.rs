use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublistError {
    #[error("Unknown filter category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Panel error: {0}")]
    Panel(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PublistError>;

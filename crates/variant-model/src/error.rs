use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid group id: {0:?}")]
    InvalidGroupId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

use crate::rules::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid contact data: {0}")]
    InvalidContactData(#[from] ValidationError),
    #[error("keypad code must contain only digits: {0}")]
    InvalidKeypadCode(String),
}

impl CoreError {
    /// The underlying field error when this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CoreError::InvalidContactData(err) => Some(err),
            CoreError::InvalidKeypadCode(_) => None,
        }
    }
}

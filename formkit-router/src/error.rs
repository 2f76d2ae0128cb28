// Router errors

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("No route matches path: {0}")]
    NotFound(String),

    #[error("No route named: {0}")]
    UnknownName(String),
}

pub type Result<T> = std::result::Result<T, RouterError>;

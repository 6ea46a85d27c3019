//! Parse errors for navigation names given in config or the environment.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

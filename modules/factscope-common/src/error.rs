use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactScopeError {
    #[error("Invalid URL submission: {0}")]
    InvalidUrl(String),
}

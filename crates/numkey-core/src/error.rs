use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Construction through a path the widget does not support.
    #[error("unsupported initialization path: {path}")]
    UnsupportedInit { path: &'static str },
    #[error("invalid keypad configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

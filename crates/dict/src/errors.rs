use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    #[error("dictionary keys cannot be falsy: {0:?}")]
    InvalidKey(String),
    #[error("required key '{0}' does not exist")]
    MissingKey(String),
    #[error("argument 1 is expected to be of type function")]
    InvalidArgument,
    #[error("namespace prefix already fixed to {current:?}, cannot switch to {requested:?}")]
    NamespaceLocked { current: String, requested: String },
}

impl DictError {
    pub fn missing(key: &str) -> Self { Self::MissingKey(key.to_string()) }
}

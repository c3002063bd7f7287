pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid field group settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

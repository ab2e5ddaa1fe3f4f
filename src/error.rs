#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no record updated")]
    NoRecordUpdated,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

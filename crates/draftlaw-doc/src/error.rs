use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

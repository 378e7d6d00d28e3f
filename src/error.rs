use thiserror::Error;

// Errors raised while turning pixels into a backdrop color.

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid argument: pixel buffer is empty")]
    EmptyBuffer,
    #[error("Invalid argument: pixel buffer length {len} is not a multiple of 4")]
    MalformedBuffer { len: usize },
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

#[derive(Error, Debug)]
pub enum BlurError {
    #[error("Blur task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

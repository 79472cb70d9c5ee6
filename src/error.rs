use image::ImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceError {
    #[error("face size must be at least 16 pixels, got {0}")]
    SizeTooSmall(u32),

    #[error("PNG encoder unavailable: {0}")]
    EncoderUnavailable(String),

    #[error(transparent)]
    Image(ImageError),
}

impl FaceError {
    /// Classify a failure from the save step. An unsupported-format error means
    /// the PNG encoder was not compiled into this build.
    pub fn from_save(err: ImageError) -> Self {
        match err {
            ImageError::Unsupported(e) => FaceError::EncoderUnavailable(e.to_string()),
            other => FaceError::Image(other),
        }
    }
}

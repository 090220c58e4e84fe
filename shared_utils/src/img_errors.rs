//! Image Compression Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgCompressError {
    #[error("Image format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read image: {0}")]
    ImageReadError(String),

    #[error("HEIF encoding failed: {0}")]
    EncodingError(String),

    #[error("Conversion failed: {0}")]
    ConversionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImgCompressError>;

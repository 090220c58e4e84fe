pub mod compressor;

pub use compressor::{CompressOptions, HeifCompressor, HEIC_EXTENSION};

pub use shared_utils::img_errors::{ImgCompressError, Result};

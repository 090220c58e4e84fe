//! Shared Utilities for the img_heic tool
//!
//! This crate provides common functionality used by the img_heic CLI:
//! - Batch file collection and result counters
//! - Output path derivation and unified conversion results
//! - Summary reporting
//! - Progress bar helpers
//! - Logging bootstrap (tracing)
//! - Validated domain types (compression quality)

pub mod batch;
pub mod common_utils;
pub mod conversion;
pub mod img_errors;
pub mod logging;
pub mod progress;
pub mod report;
pub mod types;

pub use batch::{collect_files, BatchResult, SUPPORTED_IMAGE_EXTENSIONS};
pub use common_utils::{
    ensure_dir_exists, ensure_parent_dir_exists, get_extension_lowercase, has_extension,
    validate_file_integrity,
};
pub use conversion::{
    determine_output_path, determine_output_path_with_base, ConversionResult,
};
pub use img_errors::{ImgCompressError, Result};
pub use progress::{create_progress_bar, format_bytes, format_duration};
pub use report::{print_simple_summary, print_summary_report};
pub use types::{Quality, QualityError, QUALITY_DEFAULT, QUALITY_MAX, QUALITY_MIN};

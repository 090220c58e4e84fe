//! Conversion Utilities Module
//!
//! - ConversionResult: unified per-file result structure
//! - Output path derivation (flat and base-relative)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub success: bool,
    pub input_path: String,
    pub output_path: Option<String>,
    pub input_size: u64,
    pub output_size: Option<u64>,
    pub size_reduction: Option<f64>,
    pub message: String,
    pub skipped: bool,
    pub skip_reason: Option<String>,
}

impl ConversionResult {
    pub fn converted(input: &Path, output: &Path, input_size: u64, output_size: u64) -> Self {
        let size_reduction = if input_size > 0 {
            Some((1.0 - output_size as f64 / input_size as f64) * 100.0)
        } else {
            None
        };
        let message = format!(
            "Compressed: {} → {}",
            input.display(),
            output.display()
        );
        Self {
            success: true,
            input_path: input.display().to_string(),
            output_path: Some(output.display().to_string()),
            input_size,
            output_size: Some(output_size),
            size_reduction,
            message,
            skipped: false,
            skip_reason: None,
        }
    }

    pub fn skipped_exists(input: &Path, output: &Path) -> Self {
        let input_size = fs::metadata(input).map(|m| m.len()).unwrap_or(0);
        Self {
            success: true,
            input_path: input.display().to_string(),
            output_path: Some(output.display().to_string()),
            input_size,
            output_size: fs::metadata(output).map(|m| m.len()).ok(),
            size_reduction: None,
            message: "Skipped: Output file exists".to_string(),
            skipped: true,
            skip_reason: Some("exists".to_string()),
        }
    }
}

/// Derive the output path for `input`: same base name, new extension.
/// With an output dir, files land flat inside it. Input and output must
/// not collide.
pub fn determine_output_path(
    input: &Path,
    extension: &str,
    output_dir: &Option<PathBuf>,
) -> Result<PathBuf, String> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output = match output_dir {
        Some(dir) => {
            let _ = fs::create_dir_all(dir);
            dir.join(format!("{}.{}", stem, extension))
        }
        None => input.with_extension(extension),
    };

    let input_canonical = input.canonicalize().unwrap_or_else(|_| input.to_path_buf());
    let output_canonical = if output.exists() {
        output.canonicalize().unwrap_or_else(|_| output.clone())
    } else {
        output.clone()
    };

    if input_canonical == output_canonical || input == output {
        return Err(format!(
            "Input and output paths are identical: {}\n\
             Tip: use --output/-o for a different output dir",
            input.display()
        ));
    }

    if let Some(parent) = output.parent() {
        let _ = fs::create_dir_all(parent);
    }

    Ok(output)
}

/// Like [`determine_output_path`], but mirrors the path of `input` relative
/// to `base_dir` under the output dir.
pub fn determine_output_path_with_base(
    input: &Path,
    base_dir: &Path,
    extension: &str,
    output_dir: &Option<PathBuf>,
) -> Result<PathBuf, String> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output = match output_dir {
        Some(dir) => {
            let rel_path = input
                .strip_prefix(base_dir)
                .unwrap_or(input)
                .parent()
                .unwrap_or(Path::new(""));

            let out_subdir = dir.join(rel_path);
            let _ = fs::create_dir_all(&out_subdir);

            out_subdir.join(format!("{}.{}", stem, extension))
        }
        None => input.with_extension(extension),
    };

    let input_canonical = input.canonicalize().unwrap_or_else(|_| input.to_path_buf());
    let output_canonical = if output.exists() {
        output.canonicalize().unwrap_or_else(|_| output.clone())
    } else {
        output.clone()
    };

    if input_canonical == output_canonical || input == output {
        return Err(format!(
            "Input and output paths are identical: {}\n\
             Tip: use --output/-o for a different output dir",
            input.display()
        ));
    }

    if let Some(parent) = output.parent() {
        let _ = fs::create_dir_all(parent);
    }

    Ok(output)
}

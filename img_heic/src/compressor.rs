//! HEIC Compressor Module
//!
//! Decodes JPEG/PNG via the image crate and re-encodes into an HEVC-in-HEIF
//! container through system libheif.

use image::DynamicImage;
use libheif_rs::{
    Channel, ColorSpace, CompressionFormat, EncoderQuality, HeifContext, Image, LibHeif,
    RgbChroma,
};
use shared_utils::img_errors::{ImgCompressError, Result};
use shared_utils::{
    collect_files, common_utils, create_progress_bar, determine_output_path,
    determine_output_path_with_base, print_summary_report, BatchResult, ConversionResult,
    Quality, SUPPORTED_IMAGE_EXTENSIONS,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Output extension for all converted files.
pub const HEIC_EXTENSION: &str = "heic";

#[derive(Debug, Clone, Default)]
pub struct CompressOptions {
    /// Output directory (default: next to each input file)
    pub output_dir: Option<PathBuf>,
    /// Base directory for mirroring relative paths under `output_dir`
    pub base_dir: Option<PathBuf>,
    /// Overwrite existing outputs
    pub force: bool,
    /// Show skipped files in batch output
    pub verbose: bool,
}

/// JPEG/PNG → HEIC compressor with a validated quality setting.
pub struct HeifCompressor {
    quality: Quality,
    options: CompressOptions,
}

impl HeifCompressor {
    pub fn new(quality: Quality) -> Self {
        Self {
            quality,
            options: CompressOptions::default(),
        }
    }

    pub fn with_options(quality: Quality, options: CompressOptions) -> Self {
        Self { quality, options }
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Quality is range-validated at [`Quality`] construction time.
    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality;
    }

    /// Compress a single image into a `.heic` sibling (or into the
    /// configured output directory).
    ///
    /// Fails if the input cannot be decoded or the destination cannot be
    /// written. An existing output is skipped unless `force` is set.
    pub fn compress(&self, input: &Path) -> Result<ConversionResult> {
        common_utils::validate_file_integrity(input)
            .map_err(|e| ImgCompressError::ImageReadError(format!("{}: {}", input.display(), e)))?;

        let output = self.output_path_for(input)?;

        if output.exists() && !self.options.force {
            tracing::info!(input = %input.display(), "output exists, skipping");
            return Ok(ConversionResult::skipped_exists(input, &output));
        }

        let img = image::open(input)?;

        encode_heif(&img, &output, self.quality)?;

        let input_size = fs::metadata(input)?.len();
        let output_size = fs::metadata(&output)?.len();

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            input_size,
            output_size,
            quality = self.quality.value(),
            "converted"
        );

        Ok(ConversionResult::converted(
            input,
            &output,
            input_size,
            output_size,
        ))
    }

    /// Convert every supported image under `input`, sequentially.
    ///
    /// Failing files are reported and counted; the batch continues. Prints
    /// a summary report when done.
    pub fn process_directory(&self, input: &Path, recursive: bool) -> Result<BatchResult> {
        let start_time = Instant::now();

        let files = collect_files(input, SUPPORTED_IMAGE_EXTENSIONS, recursive);
        let total = files.len();
        if total == 0 {
            println!("📂 No image files found in {}", input.display());
            return Ok(BatchResult::new());
        }

        if self.options.verbose {
            println!("📂 Found {} files to process", total);
        }

        let mut result = BatchResult::new();
        let mut input_bytes: u64 = 0;
        let mut output_bytes: u64 = 0;

        let pb = create_progress_bar(total as u64, "Converting");

        for path in &files {
            match self.compress(path) {
                Ok(r) if r.skipped => {
                    if self.options.verbose {
                        pb.println(format!("⏭️ {}: {}", r.message, path.display()));
                    }
                    result.skip();
                }
                Ok(r) => {
                    input_bytes += r.input_size;
                    if let Some(out_size) = r.output_size {
                        output_bytes += out_size;
                    }
                    pb.println(format!("✅ {}", describe_conversion(&r)));
                    result.success();
                }
                Err(e) => {
                    pb.println(format!("❌ Conversion failed {}: {}", path.display(), e));
                    result.fail(path.clone(), e.to_string());
                }
            }
            pb.inc(1);
            pb.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }

        pb.finish_with_message("Complete!");

        print_summary_report(
            &result,
            start_time.elapsed(),
            input_bytes,
            output_bytes,
            "Image Conversion",
        );

        Ok(result)
    }

    fn output_path_for(&self, input: &Path) -> Result<PathBuf> {
        if let Some(ref base) = self.options.base_dir {
            determine_output_path_with_base(input, base, HEIC_EXTENSION, &self.options.output_dir)
                .map_err(ImgCompressError::ConversionError)
        } else {
            determine_output_path(input, HEIC_EXTENSION, &self.options.output_dir)
                .map_err(ImgCompressError::ConversionError)
        }
    }
}

/// One-line status for a successful conversion, with size change.
pub fn describe_conversion(result: &ConversionResult) -> String {
    match (result.output_size, result.size_reduction) {
        (Some(out_size), Some(reduction)) => format!(
            "{} ({} → {}, {:.1}% reduction)",
            result.message,
            shared_utils::format_bytes(result.input_size),
            shared_utils::format_bytes(out_size),
            reduction
        ),
        _ => result.message.clone(),
    }
}

fn encode_heif(img: &DynamicImage, output: &Path, quality: Quality) -> Result<()> {
    let lib_heif = LibHeif::new();
    let width = img.width();
    let height = img.height();
    let has_alpha = img.color().has_alpha();

    let chroma = if has_alpha {
        RgbChroma::Rgba
    } else {
        RgbChroma::Rgb
    };
    let mut heif_image = Image::new(width, height, ColorSpace::Rgb(chroma)).map_err(|e| {
        ImgCompressError::EncodingError(format!("Failed to create HEIF image: {}", e))
    })?;
    heif_image
        .create_plane(Channel::Interleaved, width, height, 8)
        .map_err(|e| {
            ImgCompressError::EncodingError(format!("Failed to create pixel plane: {}", e))
        })?;

    let bytes_per_pixel: usize = if has_alpha { 4 } else { 3 };
    let row_len = width as usize * bytes_per_pixel;
    let pixels = if has_alpha {
        img.to_rgba8().into_raw()
    } else {
        img.to_rgb8().into_raw()
    };

    {
        let planes = heif_image.planes_mut();
        let plane = planes.interleaved.ok_or_else(|| {
            ImgCompressError::EncodingError("No interleaved RGB plane".to_string())
        })?;
        // libheif rows are stride-aligned; copy row by row.
        let stride = plane.stride;
        for (row, chunk) in pixels.chunks_exact(row_len).enumerate() {
            let start = row * stride;
            plane.data[start..start + row_len].copy_from_slice(chunk);
        }
    }

    let mut context = HeifContext::new().map_err(|e| {
        ImgCompressError::EncodingError(format!("Failed to create HEIF context: {}", e))
    })?;
    let mut encoder = lib_heif
        .encoder_for_format(CompressionFormat::Hevc)
        .map_err(|e| {
            ImgCompressError::EncodingError(format!("No HEVC encoder available: {}", e))
        })?;
    encoder
        .set_quality(EncoderQuality::Lossy(quality.value()))
        .map_err(|e| ImgCompressError::EncodingError(format!("Failed to set quality: {}", e)))?;
    context
        .encode_image(&heif_image, &mut encoder, None)
        .map_err(|e| ImgCompressError::EncodingError(format!("Failed to encode image: {}", e)))?;
    context
        .write_to_file(output.to_string_lossy().as_ref())
        .map_err(|e| {
            ImgCompressError::EncodingError(format!(
                "Failed to write {}: {}",
                output.display(),
                e
            ))
        })?;

    Ok(())
}

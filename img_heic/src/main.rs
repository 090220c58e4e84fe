use clap::Parser;
use img_heic::{CompressOptions, HeifCompressor};
use shared_utils::logging::{self, LogConfig};
use shared_utils::{Quality, QUALITY_DEFAULT};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img-heic")]
#[command(version, about = "Batch JPEG/PNG to HEIC compressor", long_about = None)]
struct Cli {
    /// Input file or directory (prompted for interactively when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Compression quality (0-100)
    #[arg(short, long, default_value_t = QUALITY_DEFAULT)]
    quality: u8,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Recursive directory scan
    #[arg(short, long, default_value_t = true)]
    recursive: bool,

    /// Process only the top level of the input directory
    #[arg(long)]
    no_recursive: bool,

    /// Overwrite existing .heic outputs
    #[arg(short, long)]
    force: bool,

    /// Print a machine-readable JSON result
    #[arg(long)]
    json: bool,

    /// Verbose output (show skipped files)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = logging::init_logging("img_heic", LogConfig::default());

    let cli = Cli::parse();
    let recursive = cli.recursive && !cli.no_recursive;

    let quality = Quality::new(cli.quality)?;

    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    // Mirror the input tree under --output when converting a directory.
    let base_dir = if input.is_dir() && cli.output.is_some() {
        Some(input.clone())
    } else {
        None
    };

    let compressor = HeifCompressor::with_options(
        quality,
        CompressOptions {
            output_dir: cli.output,
            base_dir,
            force: cli.force,
            verbose: cli.verbose,
        },
    );

    if input.is_file() {
        println!("📄 Processing file: {}", input.display());
        let result = compressor.compress(&input)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if result.skipped {
            println!("⏭️ {}", result.message);
        } else {
            println!("✅ {}", img_heic::compressor::describe_conversion(&result));
        }
    } else if input.is_dir() {
        println!("📂 Processing directory: {}", input.display());
        let result = compressor.process_directory(&input, recursive)?;
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "total": result.total,
                    "succeeded": result.succeeded,
                    "failed": result.failed,
                    "skipped": result.skipped,
                })
            );
        }
    } else {
        println!("❌ Input path does not exist: {}", input.display());
    }

    Ok(())
}

fn prompt_for_path() -> anyhow::Result<PathBuf> {
    print!("Enter a file or directory path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    // Drag-and-drop from a file manager wraps the path in quotes
    let trimmed = line.trim().trim_matches('"');
    Ok(PathBuf::from(trimmed))
}

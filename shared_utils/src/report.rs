//! Report Module
//!
//! Summary reporting for batch conversions.

use crate::batch::BatchResult;
use crate::progress::{format_bytes, format_duration};
use console::style;
use std::time::Duration;

pub fn print_summary_report(
    result: &BatchResult,
    duration: Duration,
    input_bytes: u64,
    output_bytes: u64,
    operation_name: &str,
) {
    let reduction = if input_bytes > 0 {
        (1.0 - output_bytes as f64 / input_bytes as f64) * 100.0
    } else {
        0.0
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!(
        "║                        📊 {} Summary Report                        ║",
        operation_name
    );
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  📁 Files Processed:    {:>10}                                         ║",
        result.total
    );
    println!(
        "║  ✅ Succeeded:          {:>10}                                         ║",
        result.succeeded
    );
    println!(
        "║  ❌ Failed:             {:>10}                                         ║",
        result.failed
    );
    println!(
        "║  ⏭️  Skipped:            {:>10}                                         ║",
        result.skipped
    );
    println!(
        "║  📈 Success Rate:       {:>9.1}%                                         ║",
        result.success_rate()
    );
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  💾 Input Size:         {:>10}                                         ║",
        format_bytes(input_bytes)
    );
    println!(
        "║  💾 Output Size:        {:>10}                                         ║",
        format_bytes(output_bytes)
    );
    println!(
        "║  📉 Size Reduction:     {:>9.1}%                                         ║",
        reduction
    );
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  ⏱️  Total Time:         {:>10}                                         ║",
        format_duration(duration)
    );
    if result.total > 0 {
        let avg_time = duration.as_secs_f64() / result.total as f64;
        println!(
            "║  ⏱️  Avg Time/File:      {:>9.2}s                                         ║",
            avg_time
        );
    }
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");

    if !result.errors.is_empty() {
        println!();
        println!("❌ Errors encountered:");
        println!(
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
        );
        for (path, error) in &result.errors {
            println!("   {} → {}", path.display(), style(error).red());
        }
    }
}

pub fn print_simple_summary(result: &BatchResult) {
    println!(
        "\n✅ Complete: {} succeeded, {} failed, {} skipped (total: {})",
        result.succeeded, result.failed, result.skipped, result.total
    );
}

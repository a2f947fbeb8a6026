//! Human-readable rendering shared by the commands.

use assay::{QualityReport, SourceMetadata};
use colored::{ColoredString, Colorize};

pub fn print_source(action: &str, source: &SourceMetadata) {
    println!("{} {}", action.cyan().bold(), source.file.white());
    println!(
        "  {} rows × {} columns ({})",
        source.row_count, source.column_count, source.format
    );
    println!();
}

pub fn score_colored(score: f64) -> ColoredString {
    let text = format!("{:.1}/100", score);
    if score >= 80.0 {
        text.green().bold()
    } else if score >= 60.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn print_quality(report: &QualityReport, verbose: bool) {
    let missing = &report.missing_values;
    let duplicates = &report.duplicates;
    let outliers = &report.outliers;

    println!("{}", "Missing values:".yellow().bold());
    println!(
        "  {} of {} cells ({})",
        missing.total_missing, missing.total_cells,
        percent(missing.total_missing_percentage)
    );
    for (column, stats) in &missing.missing_columns {
        println!(
            "    {:<24} {:>6}  {}",
            column,
            stats.count,
            percent(stats.percentage)
        );
    }
    if missing.has_critical_missing {
        println!("  {}", "At least one column is critically incomplete".red());
    }
    println!();

    println!("{}", "Duplicates:".yellow().bold());
    println!(
        "  {} rows ({})",
        duplicates.duplicate_count,
        percent(duplicates.duplicate_percentage)
    );
    if verbose && duplicates.has_duplicates {
        let shown: Vec<String> = duplicates
            .duplicate_indexes
            .iter()
            .take(20)
            .map(|i| i.to_string())
            .collect();
        println!("  rows: {}", shown.join(", ").dimmed());
    }
    println!();

    println!("{}", "Outliers (IQR):".yellow().bold());
    println!(
        "  {} values ({})",
        outliers.total_outliers,
        percent(outliers.outlier_percentage)
    );
    for (column, stats) in &outliers.outlier_columns {
        println!(
            "    {:<24} {:>6}  bounds [{:.2}, {:.2}]  observed [{}, {}]",
            column,
            stats.count,
            stats.lower_bound,
            stats.upper_bound,
            stats.min_value,
            stats.max_value
        );
    }
    println!();

    println!("Quality score: {}", score_colored(report.quality_score));
}

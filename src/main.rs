use anyhow::{Context, Result};
use clap::Parser;

use sales_cleaner::logging::init_logging;
use sales_cleaner::{CleaningPipeline, Config};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);

    let pipeline = CleaningPipeline::new();
    let (table, report) = pipeline
        .run(&config.input, &config.output)
        .with_context(|| {
            format!(
                "Failed to clean {} into {}",
                config.input.display(),
                config.output.display()
            )
        })?;

    if config.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    println!("✓ Cleaning complete: {}", config.output.display());
    println!("  {}", report.summary());

    if config.preview > 0 {
        println!("\nFirst {} rows:", config.preview.min(table.len()));
        println!("{}", table.preview(config.preview));
    }

    Ok(())
}

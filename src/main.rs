pub mod bird;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod render;
pub mod summary;

use bird::parse;
use clap::Parser;
use cli::Cli;
use clipboard::{CopyOutcome, copy_html};
use error::{CrateError, Result};
use export::write_output;
use log::{error, info, warn};
use render::render;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use summary::{ListSummary, has_usable_output};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    // RUST_LOG, when set, overrides the default level.
    if let Err(e) = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .try_init()
    {
        eprintln!("Logger initialisation failed: {}", e);
    }

    info!("Starting birdsort...");
    if let Some(input_file) = &cli.input_file {
        info!("Input file: {:?}", input_file);
    }
    info!("Output format: {:?}", cli.format);
    if let Some(output_file) = &cli.output_file {
        info!("Output file: {:?}", output_file);
    }

    let start_time = Instant::now();

    let text = match read_input(cli.text.as_deref(), cli.input_file.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read bird list: {}", e);
            return Err(e);
        }
    };

    let entries = parse(&text);
    let html = render(&entries);
    let usable = has_usable_output(&entries, &html);
    if usable {
        info!("Sorted {} bird entries.", entries.len());
    } else {
        warn!("Input contains no bird entries.");
    }

    if let Err(e) = emit(&cli, &entries, &html) {
        error!("Failed to write output: {}", e);
        return Err(e);
    }

    if cli.copy {
        if usable {
            if cfg!(target_os = "linux") {
                info!(
                    "Serving clipboard for up to {}s; copy something else to release it.",
                    cli.copy_wait
                );
            }
            match copy_html(&html, Duration::from_secs(cli.copy_wait)) {
                Ok(CopyOutcome::Html) => info!("HTML content copied to clipboard!"),
                Ok(CopyOutcome::PlainText) => warn!(
                    "Raw content copied to clipboard! This might not be what you want."
                ),
                Err(e) => warn!("{}", e),
            }
        } else {
            warn!("Nothing to copy.");
        }
    }

    if cli.stats {
        let summary = ListSummary::from_entries(&entries);
        eprintln!("\n--- Summary ---");
        eprintln!("Number of birds: {}", summary.count);
        eprintln!("Longest common name: {}", summary.longest_common_name);
        eprintln!("Longest scientific name: {}", summary.longest_scientific_name);
    }

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(())
}

/// Resolves the raw list: inline text, then a file, then stdin.
fn read_input(text: Option<&str>, input_file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = input_file {
        return fs::read_to_string(path).map_err(CrateError::IoError);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn emit(cli: &Cli, entries: &[bird::BirdEntry], html: &str) -> Result<()> {
    match &cli.output_file {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_output(&cli.format, entries, html, &mut writer)?;
            info!("Output written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_output(&cli.format, entries, html, &mut writer)?;
        }
    }
    Ok(())
}

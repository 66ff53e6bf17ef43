//! Plant Health Detector - Main Entry Point

use clap::Parser;
use leaf_diagnose::{
    init_logging, ConsolePresenter, DiagnoseError, FileSource, LeafDiagnostics, OutputFormat,
    Overrides, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Classify the health of a plant leaf from a photograph
#[derive(Debug, Parser)]
#[command(name = "plant-health", version, about)]
struct Cli {
    /// Leaf image (JPEG, PNG, BMP, ...)
    image: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Directory to save the resized frame, edge mask and rust mask into
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Settings file (defaults to ./plant-health.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = Overrides {
        log_level: cli.log_level,
        output: cli.output,
        save_dir: cli.save_dir,
    };
    let settings = match Settings::load(cli.config.as_deref(), overrides) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&settings.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    info!("=== Plant Health Detector v{} ===", env!("CARGO_PKG_VERSION"));

    let mut source = FileSource::new(cli.image);
    let mut presenter = ConsolePresenter::new(std::io::stdout().lock(), settings.output)
        .with_save_dir(settings.save_dir);

    match LeafDiagnostics::new().run(&mut source, &mut presenter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(DiagnoseError::NoInputSelected) => {
            println!("No file selected.");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_unreadable_input() => {
            error!("{e}");
            println!("Error: Could not read the image. Please upload a valid file.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

//! Plant Leaf Health Diagnosis
//!
//! Wires the feature engine and the health classifier to the outside world:
//! an [`ImageSource`] supplies encoded bytes, [`LeafDiagnostics`] decodes,
//! extracts and classifies, and a [`ResultPresenter`] reports the outcome.

pub mod config;
mod error;
mod pipeline;
pub mod present;
pub mod source;

pub use crate::config::{OutputFormat, Overrides, Settings};
pub use error::DiagnoseError;
pub use pipeline::{Diagnosis, LeafDiagnostics};
pub use present::{ConsolePresenter, ResultPresenter};
pub use source::{BytesSource, FileSource, ImageSource};

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
///
/// Logs go to stderr so stdout stays reserved for the report.
pub fn init_logging(level: &str) -> Result<(), DiagnoseError> {
    let level = Level::from_str(level)
        .map_err(|_| DiagnoseError::InvalidLogLevel(level.to_string()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| DiagnoseError::Logging(e.to_string()))
}

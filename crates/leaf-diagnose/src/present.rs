//! Result presentation

use crate::config::OutputFormat;
use crate::{DiagnoseError, Diagnosis};
use leaf_features::Extraction;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// File name of the saved canonical frame
pub const RESIZED_FILE: &str = "resized.png";
/// File name of the saved edge mask
pub const EDGES_FILE: &str = "edges.png";
/// File name of the saved rust mask
pub const RUST_FILE: &str = "rust.png";

/// Consumes one finished diagnosis
pub trait ResultPresenter {
    /// `extraction` carries the canonical frame, edge mask and rust mask
    fn present(&mut self, diagnosis: &Diagnosis, extraction: &Extraction)
        -> Result<(), DiagnoseError>;
}

/// Writes a text or JSON report and optionally saves the frames as PNG
pub struct ConsolePresenter<W: Write> {
    out: W,
    format: OutputFormat,
    save_dir: Option<PathBuf>,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            save_dir: None,
        }
    }

    /// Save the canonical frame, edge mask and rust mask into `dir`
    pub fn with_save_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.save_dir = dir;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_text(&mut self, diagnosis: &Diagnosis) -> Result<(), DiagnoseError> {
        let f = &diagnosis.features;
        let [mr, mg, mb] = f.color_mean.to_array();
        let [sr, sg, sb] = f.color_std_dev.to_array();

        writeln!(self.out, "Extracted Features:")?;
        writeln!(self.out, "Color Mean (RGB): [{mr:.2}, {mg:.2}, {mb:.2}]")?;
        writeln!(self.out, "Color StdDev (RGB): [{sr:.2}, {sg:.2}, {sb:.2}]")?;
        writeln!(self.out, "Edge Count: {}", f.edge_count)?;
        writeln!(
            self.out,
            "Rust Ratio: {:.4} ({} px)",
            f.rust_ratio, f.rust_pixel_count
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Plant Health Status: {}", diagnosis.label)?;
        Ok(())
    }

    fn write_json(&mut self, diagnosis: &Diagnosis) -> Result<(), DiagnoseError> {
        serde_json::to_writer_pretty(&mut self.out, diagnosis)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn save_images(&self, extraction: &Extraction) -> Result<(), DiagnoseError> {
        let Some(dir) = &self.save_dir else {
            return Ok(());
        };
        std::fs::create_dir_all(dir)?;
        extraction.resized.save(dir.join(RESIZED_FILE))?;
        extraction.edges.save(dir.join(EDGES_FILE))?;
        extraction.rust.save(dir.join(RUST_FILE))?;
        info!("Saved canonical frame, edge and rust masks to {}", dir.display());
        Ok(())
    }
}

impl<W: Write> ResultPresenter for ConsolePresenter<W> {
    fn present(
        &mut self,
        diagnosis: &Diagnosis,
        extraction: &Extraction,
    ) -> Result<(), DiagnoseError> {
        match self.format {
            OutputFormat::Text => self.write_text(diagnosis)?,
            OutputFormat::Json => self.write_json(diagnosis)?,
        }
        self.out.flush()?;
        self.save_images(extraction)
    }
}

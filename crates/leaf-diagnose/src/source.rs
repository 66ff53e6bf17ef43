//! Image acquisition

use crate::DiagnoseError;
use std::path::PathBuf;
use tracing::{info, warn};

/// Supplies the encoded bytes of one image
///
/// `Ok(None)` means nothing was selected.
pub trait ImageSource {
    fn acquire(&mut self) -> Result<Option<Vec<u8>>, DiagnoseError>;
}

/// Reads the image from a filesystem path
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ImageSource for FileSource {
    fn acquire(&mut self) -> Result<Option<Vec<u8>>, DiagnoseError> {
        let Some(path) = &self.path else {
            warn!("No image path given");
            return Ok(None);
        };

        let bytes = std::fs::read(path).map_err(|source| DiagnoseError::ReadInput {
            path: path.clone(),
            source,
        })?;
        info!("Loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(Some(bytes))
    }
}

/// In-memory source, handing out its bytes once
#[derive(Debug, Clone, Default)]
pub struct BytesSource {
    bytes: Option<Vec<u8>>,
}

impl BytesSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// A source that never supplies an image
    pub fn empty() -> Self {
        Self { bytes: None }
    }
}

impl ImageSource for BytesSource {
    fn acquire(&mut self) -> Result<Option<Vec<u8>>, DiagnoseError> {
        Ok(self.bytes.take())
    }
}

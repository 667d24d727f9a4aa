//! Locating and binding the PDFium shared library.

use pdfium_render::prelude::*;
use tracing::debug;

use crate::error::{PreviewError, Result};

/// Directory checked for a bundled PDFium before falling back to the system library.
pub const BUNDLED_LIB_DIR: &str = "./lib";

/// Bind PDFium from `./lib`, else from the system library search path.
pub fn bind() -> Result<Pdfium> {
    let bundled = Pdfium::pdfium_platform_library_name_at_path(BUNDLED_LIB_DIR);
    let bindings = match Pdfium::bind_to_library(bundled.clone()) {
        Ok(bindings) => bindings,
        Err(err) => {
            debug!(path = ?bundled, error = ?err, "no bundled pdfium, trying system library");
            Pdfium::bind_to_system_library().map_err(PreviewError::Bind)?
        }
    };

    Ok(Pdfium::new(bindings))
}

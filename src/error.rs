use pdfium_render::prelude::PdfiumError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{} missing", display_name(.path))]
    MissingInput { path: PathBuf },

    #[error("could not bind the PDFium library: {0:?}")]
    Bind(PdfiumError),

    #[error("pdf rendering failed: {0:?}")]
    Pdfium(#[from] PdfiumError),

    #[error("could not write preview to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, PreviewError>;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

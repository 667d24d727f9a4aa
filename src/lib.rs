//! Renders the first page of `public/cv.pdf` into `public/cv_preview_1.png`
//! for use as a webpage thumbnail.

pub mod config;
pub mod error;
pub mod pdfium;
pub mod preview;

pub use config::PreviewConfig;
pub use error::{PreviewError, Result};
pub use preview::PreviewGenerator;

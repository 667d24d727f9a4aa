//! First-page PNG preview of the CV document.
//!
//! The page cap is applied as `min(max_pages, page_count)` so a document with
//! no pages renders nothing instead of failing on a missing page 1.

use image::ImageFormat;
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::PreviewConfig;
use crate::error::{PreviewError, Result};
use crate::pdfium;

#[derive(Debug, Clone, Default)]
pub struct PreviewGenerator {
    config: PreviewConfig,
}

impl PreviewGenerator {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Check the input, bind PDFium and render.
    ///
    /// Returns the last preview written, or `None` when the document has no
    /// pages. The existence check runs before PDFium is bound.
    pub fn run(&self) -> Result<Option<PathBuf>> {
        self.ensure_input()?;
        let pdfium = pdfium::bind()?;
        self.render(&pdfium)
    }

    /// Render with an already bound PDFium instance.
    pub fn render(&self, pdfium: &Pdfium) -> Result<Option<PathBuf>> {
        self.ensure_input()?;

        let document = pdfium.load_pdf_from_file(&self.config.input, None)?;
        let page_count = document.pages().len();
        debug!(input = %self.config.input.display(), page_count, "opened document");

        let render_config = PdfRenderConfig::new().scale_page_by_factor(self.config.scale);

        let mut last_written = None;
        for page_index in 0..self.pages_to_render(page_count) {
            let page = document.pages().get(page_index)?;
            let bitmap = page.render_with_config(&render_config)?;
            debug!(
                page = page_index + 1,
                width = bitmap.width(),
                height = bitmap.height(),
                "rendered page"
            );

            let out_path = self.output_path(page_index);
            bitmap
                .as_image()
                .save_with_format(&out_path, ImageFormat::Png)
                .map_err(|source| PreviewError::Write {
                    path: out_path.clone(),
                    source,
                })?;
            info!(output = %out_path.display(), "wrote preview");

            last_written = Some(out_path);
        }

        if last_written.is_none() {
            warn!(input = %self.config.input.display(), "document has no pages, nothing rendered");
        }

        Ok(last_written)
    }

    pub fn pages_to_render(&self, page_count: PdfPageIndex) -> PdfPageIndex {
        self.config.max_pages.min(page_count)
    }

    /// `<output_dir>/<stem>_<n>.png` with `n` the 1-based page number.
    pub fn output_path(&self, page_index: PdfPageIndex) -> PathBuf {
        let page_number = u32::from(page_index) + 1;
        self.config
            .output_dir
            .join(format!("{}_{}.png", self.config.file_stem, page_number))
    }

    fn ensure_input(&self) -> Result<()> {
        if self.config.input.exists() {
            Ok(())
        } else {
            Err(PreviewError::MissingInput {
                path: self.config.input.clone(),
            })
        }
    }
}

#![allow(dead_code)]

use cv_preview::PreviewConfig;
use pdfium_render::prelude::*;
use std::path::Path;
use tempfile::TempDir;

pub const LETTER: (f32, f32) = (612.0, 792.0);

/// Bound PDFium, or `None` (with a note on stderr) where the library is not installed.
pub fn bind_or_skip(test: &str) -> Option<Pdfium> {
    match cv_preview::pdfium::bind() {
        Ok(pdfium) => Some(pdfium),
        Err(err) => {
            eprintln!("skipping {test}: {err}");
            None
        }
    }
}

/// Temp site root with an empty `public/` directory.
pub fn site() -> (TempDir, PreviewConfig) {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::create_dir_all(dir.path().join("public")).expect("public dir");
    let config = PreviewConfig::in_dir(dir.path());
    (dir, config)
}

/// Write a blank PDF with one page per `(width, height)` in points.
pub fn write_pdf(pdfium: &Pdfium, path: &Path, pages: &[(f32, f32)]) {
    let mut document = pdfium.create_new_pdf().expect("new pdf");
    for &(width, height) in pages {
        document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::new_custom(
                PdfPoints::new(width),
                PdfPoints::new(height),
            ))
            .expect("add page");
    }
    document.save_to_file(path).expect("save pdf");
}

pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read output dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}

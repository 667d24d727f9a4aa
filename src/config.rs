use std::path::{Path, PathBuf};

pub const INPUT_PATH: &str = "public/cv.pdf";
pub const OUTPUT_DIR: &str = "public";
pub const PREVIEW_STEM: &str = "cv_preview";

/// Uniform zoom applied to both axes; 1.0 renders one pixel per PDF point.
pub const PREVIEW_SCALE: f32 = 2.0;

/// Only the first page ever becomes a preview.
pub const MAX_PREVIEW_PAGES: u16 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub file_stem: String,
    pub scale: f32,
    pub max_pages: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            file_stem: PREVIEW_STEM.to_string(),
            scale: PREVIEW_SCALE,
            max_pages: MAX_PREVIEW_PAGES,
        }
    }
}

impl PreviewConfig {
    /// Same fixed layout, resolved under `root` instead of the working directory.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input: root.join(INPUT_PATH),
            output_dir: root.join(OUTPUT_DIR),
            ..Self::default()
        }
    }
}

use anyhow::{Context, Result};
use cv_preview::{PreviewError, PreviewGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cv_preview=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let generator = PreviewGenerator::default();

    let written = match generator.run() {
        Ok(written) => written,
        Err(err @ PreviewError::MissingInput { .. }) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!(
                    "failed to render preview of {}",
                    generator.config().input.display()
                )
            });
        }
    };

    if let Some(out_path) = written {
        println!("saved preview to {}", out_path.display());
    }

    Ok(())
}

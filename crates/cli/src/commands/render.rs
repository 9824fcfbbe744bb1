//! Render an SVG preview to a file.

use std::path::Path;

use solecraft_core::{DesignId, SneakerConfiguration, render_svg};

use super::{CommandError, api_client};

/// Write the preview of a saved design, or of the built-in default design.
///
/// # Errors
///
/// Returns an error if the design cannot be found or the file cannot be
/// written.
pub async fn run(design: Option<DesignId>, out: &Path) -> Result<(), CommandError> {
    let configuration = match design {
        Some(id) => {
            let designs = api_client()?.list_designs(None).await?;
            designs
                .into_iter()
                .find(|d| d.id == id)
                .map(|d| d.configuration)
                .ok_or_else(|| CommandError::NotFound(format!("Design {id}")))?
        }
        None => SneakerConfiguration::builtin_default(),
    };

    tokio::fs::write(out, render_svg(&configuration)?).await?;
    tracing::info!(path = %out.display(), "Preview written");
    Ok(())
}

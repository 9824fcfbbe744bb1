//! Studio API commands: catalogue, AI designer and saved designs.
//!
//! Results go to stdout, one record per line; logs go to stderr.

use std::io::{self, Write};

use solecraft_core::prompts::QUICK_IDEAS;
use solecraft_core::{DesignId, Part};

use super::{CommandError, api_client};

/// Print the product catalogue.
///
/// # Errors
///
/// Returns an error if the studio cannot be reached.
pub async fn products() -> Result<(), CommandError> {
    let products = api_client()?.list_products().await?;

    let mut out = io::stdout().lock();
    for product in products {
        writeln!(out, "{}\t{}\t{}", product.id, product.base_price, product.name)?;
    }
    Ok(())
}

/// Print the quick-idea prompts, one per line.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn ideas() -> Result<(), CommandError> {
    let mut out = io::stdout().lock();
    for idea in QUICK_IDEAS {
        writeln!(out, "{idea}")?;
    }
    Ok(())
}

/// Ask the AI designer and print the scheme, one part per line.
///
/// # Errors
///
/// Returns an error if the studio or the AI service fails.
pub async fn suggest(prompt: &str) -> Result<(), CommandError> {
    let scheme = api_client()?.suggest_colors(prompt).await?;

    let mut out = io::stdout().lock();
    for part in Part::ALL {
        writeln!(out, "{part}\t{}", scheme.color(part))?;
    }
    Ok(())
}

/// Print the owner's designs, newest first.
///
/// # Errors
///
/// Returns an error without `SOLECRAFT_USER_ID` or if the request fails.
pub async fn list(query: Option<&str>) -> Result<(), CommandError> {
    let designs = api_client()?.list_designs(query).await?;

    let mut out = io::stdout().lock();
    for design in &designs {
        let tags = design.tags.iter().collect::<Vec<_>>().join(",");
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            design.id,
            design.created_at.format("%Y-%m-%d %H:%M"),
            design.name,
            tags
        )?;
    }
    tracing::info!(count = designs.len(), "Listed designs");
    Ok(())
}

/// Delete one of the owner's designs.
///
/// # Errors
///
/// Returns an error if the design does not exist or the request fails.
pub async fn delete(id: DesignId) -> Result<(), CommandError> {
    api_client()?.delete_design(id).await?;
    tracing::info!(%id, "Design deleted");
    Ok(())
}

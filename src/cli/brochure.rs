use std::path::PathBuf;

use anyhow::{Context, Result};
use nashikweb_brochure::{Brochure, Format};

use crate::template::current_year;

/// Writes the brochure to `out`.
pub fn write(out: PathBuf, format: Format) -> Result<()> {
    let bytes = Brochure::new(current_year()).render(format)?;

    std::fs::write(&out, &bytes).with_context(|| format!("failed to write {}", out.display()))?;

    tracing::info!(path = %out.display(), %format, bytes = bytes.len(), "brochure written");

    Ok(())
}

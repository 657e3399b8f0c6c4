use anyhow::{Context, Result};
use std::path::Path;

/// Write generated secrets to a file, one per line with a trailing newline.
pub fn write_secrets(path: &Path, secrets: &[String]) -> Result<()> {
    let mut body = secrets.join("\n");
    body.push('\n');
    std::fs::write(path, body)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use vcardkit_core::config::OutputFormat;
use vcardkit_rfc::rfc::vcard::{VCard, serialize};

/// ## Summary
/// Renders parsed cards in the configured output format.
///
/// ## Errors
/// Returns an error if JSON encoding fails.
pub fn render(cards: &[VCard], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Vcard => Ok(serialize(cards)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(cards).context("Failed to encode vCards as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// ## Summary
/// Writes rendered output to `path`, or to stdout when no path is configured.
///
/// ## Errors
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), octets = output.len(), "Wrote output");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    }
    Ok(())
}

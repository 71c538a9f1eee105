//! File wrappers around [`parse`](super::parse) and [`serialize`](super::serialize).

use std::path::Path;

use vcardkit_core::error::CoreError;

use crate::error::RfcResult;
use crate::rfc::vcard::build::serialize;
use crate::rfc::vcard::core::VCard;
use crate::rfc::vcard::parse::parse;

/// Reads a UTF-8 vCard file and parses every card in it.
///
/// ## Errors
/// Returns `RfcError::Io` if the file cannot be read or is not UTF-8, and
/// `RfcError::Parse` if its content is rejected.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> RfcResult<Vec<VCard>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    tracing::trace!(octets = content.len(), "Read vCard file");
    Ok(parse(&content)?)
}

/// Serializes `cards` and writes them to `path`, replacing its content.
///
/// ## Errors
/// Returns `RfcError::Core` if `cards` is empty, since the resulting file
/// could not be parsed back, and `RfcError::Io` if the file cannot be
/// written.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), count = cards.len()))]
pub fn write_file(path: impl AsRef<Path>, cards: &[VCard]) -> RfcResult<()> {
    if cards.is_empty() {
        return Err(CoreError::InvalidInput("no vCards to write".to_string()).into());
    }
    std::fs::write(path.as_ref(), serialize(cards))?;
    tracing::debug!("Wrote vCard file");
    Ok(())
}

use thiserror::Error;
use vcardkit_core::error::CoreError;

use crate::rfc::vcard::ParseError;

/// Codec and file errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

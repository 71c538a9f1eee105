//! Wire-format constants shared across crates.

/// The only component type the grammar accepts.
pub const COMPONENT_VCARD: &str = "VCARD";

/// The only vCard version the codec accepts.
pub const SUPPORTED_VERSION: &str = "4.0";

pub const BEGIN_VCARD: &str = const_str::concat!("BEGIN:", COMPONENT_VCARD);
pub const END_VCARD: &str = const_str::concat!("END:", COMPONENT_VCARD);
pub const VERSION_LINE: &str = const_str::concat!("VERSION:", SUPPORTED_VERSION);

/// Line terminator used on output.
pub const CRLF: &str = "\r\n";

/// Maximum physical line length in octets (RFC 6350 §3.2).
pub const MAX_LINE_OCTETS: usize = 75;

/// Conventional file extension for vCard files.
pub const VCARD_FILE_EXTENSION: &str = "vcf";

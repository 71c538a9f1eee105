//! vCard implementation (RFC 6350).
//!
//! This module provides types, parsing, and serialization for vCard 4.0
//! contact data.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=work:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::new("VERSION", "4.0"));
//! card.add_property(VCardProperty::new("FN", "Jane Doe"));
//! card.add_property(VCardProperty::new("EMAIL", "jane@example.com"));
//!
//! let output = serialize(&[card]);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Round-Trip Fidelity
//!
//! Values are stored unescaped and re-escaped on output, so
//! `parse(serialize(cards))` yields the same properties, values and
//! parameters, though not necessarily byte-identical text.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardParameter`, etc.)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions and the fluent builder
//! - [`io`] - File wrappers

pub mod build;
pub mod core;
pub mod io;
pub mod parse;


// Re-export commonly used types
pub use build::{VCardBuilder, serialize, serialize_single};
pub use core::{
    AdrType, Address, EmailType, StructuredName, TelType, VCard, VCardParameter, VCardProperty,
};
pub use io::{parse_file, write_file};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};

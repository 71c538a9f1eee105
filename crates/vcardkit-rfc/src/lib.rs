//! vCard 4.0 (RFC 6350) content-line codec.
//!
//! See [`rfc::vcard`] for parsing, the in-memory model and serialization.

pub mod error;
pub mod rfc;

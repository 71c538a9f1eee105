//! RFC implementations.

pub mod vcard;

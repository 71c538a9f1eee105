//! vCard core types (RFC 6350).
//!
//! This module provides the foundational types for representing vCard data:
//!
//! - [`VCard`] - Ordered multi-map of properties for one BEGIN/END record
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property (family, given, etc.)
//! - [`Address`] - ADR property
//!
//! ## Example
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::core::{VCard, VCardProperty};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::new("FN", "John Doe"));
//! card.add_property(VCardProperty::new("EMAIL", "john@example.com"));
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```

mod parameter;
mod property;
mod structured;
mod vcard;

pub(crate) use parameter::append_param_value;
pub use parameter::{AdrType, EmailType, TelType, VCardParameter, types};
pub use property::{VCardProperty, names};
pub use structured::{ADR_ARITY, Address, N_ARITY, StructuredName, recompose};
pub use vcard::VCard;

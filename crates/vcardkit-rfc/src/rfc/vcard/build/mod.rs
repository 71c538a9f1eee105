//! vCard serialization (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardkit_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::new("FN", "John Doe"));
//! card.add_property(VCardProperty::new("EMAIL", "john@example.com"));
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("VERSION:4.0\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Text escaping per RFC 6350
//! - RFC 6868 caret encoding for parameters
//! - VERSION first, then properties in card order

mod builder;
mod escape;
mod fold;
mod serializer;

pub use builder::VCardBuilder;
pub use escape::{escape_param_value, escape_text, format_param_values};
pub use fold::fold_line;
pub use serializer::{serialize, serialize_single};

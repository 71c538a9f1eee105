//! vCard serialization.

use vcardkit_core::constants::{BEGIN_VCARD, CRLF, END_VCARD, VERSION_LINE};

use super::escape::{escape_text, format_param_values};
use super::fold::fold_line;
use crate::rfc::vcard::core::{VCard, VCardProperty, names};

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Produces RFC 6350 compliant vCard output with proper line folding and
/// escaping. Within each card the first VERSION property comes first, then
/// every other property in the card's order.
#[tracing::instrument(skip(cards), fields(count = cards.len()))]
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        serialize_vcard(card, &mut output);
    }

    tracing::debug!(octets = output.len(), "Serialized vCards");
    output
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str(BEGIN_VCARD);
    output.push_str(CRLF);

    let version = card.get_property(names::VERSION);
    match version {
        Some(prop) => serialize_property(prop, output),
        None => {
            output.push_str(VERSION_LINE);
            output.push_str(CRLF);
        }
    }

    for prop in card.properties() {
        if version.is_some_and(|v| std::ptr::eq(v, prop)) {
            continue;
        }
        serialize_property(prop, output);
    }

    output.push_str(END_VCARD);
    output.push_str(CRLF);
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    let mut line = String::new();

    if let Some(ref group) = prop.group {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name);

    for param in &prop.params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        line.push_str(&format_param_values(&param.values));
    }

    line.push(':');
    line.push_str(&escape_text(&prop.value));

    output.push_str(&fold_line(&line));
}

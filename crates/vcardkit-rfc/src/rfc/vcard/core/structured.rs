//! Structured vCard types (RFC 6350).
//!
//! Typed views over the semicolon-delimited N and ADR values. The property
//! keeps the flat string; these are built on demand and recomposed by
//! joining the components with `;`.

use serde::Serialize;

use crate::rfc::vcard::parse::decompose;

/// Number of components in an N value.
pub const N_ARITY: usize = 5;

/// Number of components in an ADR value.
pub const ADR_ARITY: usize = 7;

/// Joins structured components with `;`.
#[must_use]
pub fn recompose<S: AsRef<str>>(components: &[S]) -> String {
    components
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join(";")
}

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// All components are optional per RFC 6350; absent ones are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: String,
    /// Given names (first names).
    pub given: String,
    /// Additional names (middle names).
    pub additional: String,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: String,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: String,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Decomposes an N value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let [family, given, additional, prefixes, suffixes]: [String; N_ARITY] =
            decompose_fixed(value);
        Self {
            family,
            given,
            additional,
            prefixes,
            suffixes,
        }
    }

    /// Recomposes the N value.
    #[must_use]
    pub fn to_value(&self) -> String {
        recompose(&[
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ])
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.given.as_str(), self.family.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Address (ADR property, RFC 6350 §6.3.1).
///
/// All components are optional per RFC 6350; absent ones are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Post office box.
    pub po_box: String,
    /// Extended address (e.g., apartment or suite number).
    pub extended: String,
    /// Street address.
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl Address {
    /// Decomposes an ADR value.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let [po_box, extended, street, locality, region, postal_code, country]: [String;
            ADR_ARITY] = decompose_fixed(value);
        Self {
            po_box,
            extended,
            street,
            locality,
            region,
            postal_code,
            country,
        }
    }

    /// Recomposes the ADR value.
    #[must_use]
    pub fn to_value(&self) -> String {
        recompose(&[
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ])
    }

    /// Returns whether the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.po_box.is_empty()
            && self.extended.is_empty()
            && self.street.is_empty()
            && self.locality.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.locality.as_str(),
            self.region.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn decompose_fixed<const ARITY: usize>(value: &str) -> [String; ARITY] {
    let mut parts = decompose(value, ARITY).into_iter();
    std::array::from_fn(|_| parts.next().unwrap_or_default())
}

//! vCard component type.

use serde::ser::{Serialize, Serializer};

use super::property::{VCardProperty, names};
use super::structured::{Address, StructuredName};

/// A complete vCard: one BEGIN/END-delimited record.
///
/// Properties are kept in an ordered multi-map keyed by property name. Names
/// iterate in first-seen order; properties sharing a name keep insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    entries: Vec<(String, Vec<VCardProperty>)>,
}

impl VCard {
    /// Creates an empty vCard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Vec<VCardProperty>> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, props)| props)
    }

    /// Appends a property under its name.
    pub fn add_property(&mut self, prop: VCardProperty) {
        if let Some(props) = self.entry_mut(&prop.name) {
            props.push(prop);
        } else {
            self.entries.push((prop.name.clone(), vec![prop]));
        }
    }

    /// Replaces every property named like `prop` with `prop`, keeping the
    /// name's position. Appends if the name is new.
    pub fn replace_property(&mut self, prop: VCardProperty) {
        if let Some(props) = self.entry_mut(&prop.name) {
            *props = vec![prop];
        } else {
            self.entries.push((prop.name.clone(), vec![prop]));
        }
    }

    /// Removes and returns every property with the given name.
    pub fn remove_properties(&mut self, name: &str) -> Vec<VCardProperty> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|idx| self.entries.remove(idx).1)
            .unwrap_or_default()
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> &[VCardProperty] {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map_or(&[][..], |(_, props)| props.as_slice())
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.get_properties(name).first()
    }

    /// Returns whether at least one property with the given name exists.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        !self.get_properties(name).is_empty()
    }

    /// Iterates property names in first-seen order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates every property, grouped by name in first-seen order.
    pub fn properties(&self) -> impl Iterator<Item = &VCardProperty> {
        self.entries.iter().flat_map(|(_, props)| props.iter())
    }

    /// Returns the total number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, props)| props.len()).sum()
    }

    /// Returns whether the vCard holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn first_value(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.first_value(names::VERSION)
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_value(names::FN)
    }

    /// Returns the N (structured name) value.
    #[must_use]
    pub fn name(&self) -> Option<StructuredName> {
        self.first_value(names::N).map(StructuredName::from_value)
    }

    /// Returns the UID value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.first_value(names::UID)
    }

    /// Returns the ORG value.
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.first_value(names::ORG)
    }

    /// Returns the TITLE value.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.first_value(names::TITLE)
    }

    /// Returns the NOTE value.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.first_value(names::NOTE)
    }

    /// Returns all TEL properties.
    #[must_use]
    pub fn telephones(&self) -> &[VCardProperty] {
        self.get_properties(names::TEL)
    }

    /// Returns all EMAIL properties.
    #[must_use]
    pub fn emails(&self) -> &[VCardProperty] {
        self.get_properties(names::EMAIL)
    }

    /// Returns all URL properties.
    #[must_use]
    pub fn urls(&self) -> &[VCardProperty] {
        self.get_properties(names::URL)
    }

    /// Returns all ADR values, decomposed.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.get_properties(names::ADR)
            .iter()
            .map(|p| Address::from_value(&p.value))
            .collect()
    }
}

impl Serialize for VCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, props)| (name, props)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VCard {
        let mut card = VCard::new();
        card.add_property(VCardProperty::new("VERSION", "4.0"));
        card.add_property(VCardProperty::new("FN", "John Doe"));
        card.add_property(VCardProperty::new("TEL", "+1-555-0100"));
        card.add_property(VCardProperty::new("EMAIL", "john@example.com"));
        card.add_property(VCardProperty::new("TEL", "+1-555-0199"));
        card
    }

    #[test]
    fn vcard_new() {
        let card = VCard::new();
        assert!(card.is_empty());
        assert_eq!(card.len(), 0);
        assert!(card.version().is_none());
    }

    #[test]
    fn multimap_groups_by_first_seen_name() {
        let card = sample();
        let names: Vec<&str> = card.property_names().collect();
        assert_eq!(names, vec!["VERSION", "FN", "TEL", "EMAIL"]);

        let values: Vec<&str> = card.properties().map(|p| p.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "4.0",
                "John Doe",
                "+1-555-0100",
                "+1-555-0199",
                "john@example.com"
            ]
        );
        assert_eq!(card.len(), 5);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let card = sample();
        assert_eq!(card.get_properties("tel").len(), 2);
        assert_eq!(card.get_property("fn").map(|p| p.value.as_str()), Some("John Doe"));
        assert!(card.get_properties("ADR").is_empty());
        assert!(!card.has_property("NOTE"));
    }

    #[test]
    fn convenience_readers() {
        let card = sample();
        assert_eq!(card.version(), Some("4.0"));
        assert_eq!(card.formatted_name(), Some("John Doe"));
        assert_eq!(card.telephones().len(), 2);
        assert_eq!(card.emails()[0].value, "john@example.com");
        assert!(card.urls().is_empty());
        assert!(card.name().is_none());
    }

    #[test]
    fn structured_readers() {
        let mut card = sample();
        card.add_property(VCardProperty::new("N", "Doe;John;;;"));
        card.add_property(VCardProperty::new("ADR", ";;1 Main St;Springfield"));

        let name = card.name().unwrap();
        assert_eq!(name.family, "Doe");
        assert_eq!(name.given, "John");

        let addrs = card.addresses();
        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].locality, "Springfield");
        assert_eq!(addrs[0].country, "");
    }

    #[test]
    fn replace_keeps_position() {
        let mut card = sample();
        card.replace_property(VCardProperty::new("TEL", "+1-555-0123"));

        let names: Vec<&str> = card.property_names().collect();
        assert_eq!(names, vec!["VERSION", "FN", "TEL", "EMAIL"]);
        assert_eq!(card.telephones().len(), 1);
        assert_eq!(card.telephones()[0].value, "+1-555-0123");
    }

    #[test]
    fn remove_properties_drops_name() {
        let mut card = sample();
        let removed = card.remove_properties("tel");
        assert_eq!(removed.len(), 2);
        assert!(card.telephones().is_empty());
        assert!(card.remove_properties("TEL").is_empty());
    }

    #[test]
    fn serializes_as_json_map() {
        let card = sample();
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["FN"][0]["value"], "John Doe");
        assert_eq!(json["TEL"].as_array().map(Vec::len), Some(2));
    }
}

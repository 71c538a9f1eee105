//! Fluent construction of vCards.

use crate::rfc::vcard::core::{
    AdrType, Address, EmailType, StructuredName, TelType, VCard, VCardParameter, VCardProperty,
    names,
};

/// Fluent builder for [`VCard`].
///
/// Single-valued properties (FN, N, ORG, UID, ...) replace any earlier
/// value; TEL, EMAIL, ADR, URL, NOTE, CATEGORIES and custom properties
/// accumulate.
///
/// ```rust
/// use vcardkit_rfc::rfc::vcard::{EmailType, TelType, VCardBuilder};
///
/// let card = VCardBuilder::new()
///     .version("4.0")
///     .formatted_name("John Doe")
///     .telephone("+1-555-1234", &[TelType::Work, TelType::Voice])
///     .email("john@example.com", &[EmailType::Work])
///     .build();
///
/// assert_eq!(card.telephones()[0].get_param_values("TYPE"), ["work", "voice"]);
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct VCardBuilder {
    card: VCard,
}

impl VCard {
    /// Starts a [`VCardBuilder`].
    pub fn builder() -> VCardBuilder {
        VCardBuilder::new()
    }
}

impl VCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.card.replace_property(VCardProperty::new(name, value));
        self
    }

    fn push(mut self, prop: VCardProperty) -> Self {
        self.card.add_property(prop);
        self
    }

    fn typed(name: &str, value: impl Into<String>, types: &[&'static str]) -> VCardProperty {
        let mut prop = VCardProperty::new(name, value);
        for token in types {
            prop.add_param(VCardParameter::type_param(*token));
        }
        prop
    }

    /// Sets VERSION (normally "4.0").
    pub fn version(self, version: impl Into<String>) -> Self {
        self.set(names::VERSION, version)
    }

    /// Sets FN.
    pub fn formatted_name(self, name: impl Into<String>) -> Self {
        self.set(names::FN, name)
    }

    /// Sets N from an already-joined value.
    pub fn name(self, value: impl Into<String>) -> Self {
        self.set(names::N, value)
    }

    /// Sets N from its components.
    pub fn name_parts(self, name: &StructuredName) -> Self {
        self.set(names::N, name.to_value())
    }

    pub fn telephone(self, number: impl Into<String>, types: &[TelType]) -> Self {
        let tokens: Vec<&'static str> = types.iter().copied().map(TelType::as_str).collect();
        self.push(Self::typed(names::TEL, number, &tokens))
    }

    pub fn email(self, address: impl Into<String>, types: &[EmailType]) -> Self {
        let tokens: Vec<&'static str> = types.iter().copied().map(EmailType::as_str).collect();
        self.push(Self::typed(names::EMAIL, address, &tokens))
    }

    /// Adds ADR from an already-joined value.
    pub fn address(self, value: impl Into<String>, types: &[AdrType]) -> Self {
        let tokens: Vec<&'static str> = types.iter().copied().map(AdrType::as_str).collect();
        self.push(Self::typed(names::ADR, value, &tokens))
    }

    /// Adds ADR from its components.
    pub fn address_parts(self, address: &Address, types: &[AdrType]) -> Self {
        self.address(address.to_value(), types)
    }

    pub fn organization(self, organization: impl Into<String>) -> Self {
        self.set(names::ORG, organization)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.set(names::TITLE, title)
    }

    pub fn role(self, role: impl Into<String>) -> Self {
        self.set(names::ROLE, role)
    }

    pub fn nickname(self, nickname: impl Into<String>) -> Self {
        self.set(names::NICKNAME, nickname)
    }

    /// Sets PHOTO to a URI.
    pub fn photo(self, uri: impl Into<String>) -> Self {
        self.set(names::PHOTO, uri)
    }

    /// Sets BDAY. The value is stored as given (`YYYYMMDD` or `YYYY-MM-DD`).
    pub fn birthday(self, date: impl Into<String>) -> Self {
        self.set(names::BDAY, date)
    }

    pub fn anniversary(self, date: impl Into<String>) -> Self {
        self.set(names::ANNIVERSARY, date)
    }

    pub fn gender(self, gender: impl Into<String>) -> Self {
        self.set(names::GENDER, gender)
    }

    pub fn url(self, url: impl Into<String>) -> Self {
        self.push(VCardProperty::new(names::URL, url))
    }

    pub fn note(self, note: impl Into<String>) -> Self {
        self.push(VCardProperty::new(names::NOTE, note))
    }

    pub fn uid(self, uid: impl Into<String>) -> Self {
        self.set(names::UID, uid)
    }

    pub fn categories(self, categories: impl Into<String>) -> Self {
        self.push(VCardProperty::new(names::CATEGORIES, categories))
    }

    /// Sets REV.
    pub fn revision(self, revision: impl Into<String>) -> Self {
        self.set(names::REV, revision)
    }

    pub fn time_zone(self, time_zone: impl Into<String>) -> Self {
        self.set(names::TZ, time_zone)
    }

    pub fn geo(self, geo: impl Into<String>) -> Self {
        self.set(names::GEO, geo)
    }

    /// Adds an arbitrary property, typically an `X-` extension.
    pub fn custom_property(self, name: &str, value: impl Into<String>) -> Self {
        self.push(VCardProperty::new(name, value))
    }

    /// Finishes the card. No required-property check happens here.
    #[must_use]
    pub fn build(self) -> VCard {
        self.card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::build::serialize_single;
    use crate::rfc::vcard::parse::parse_single;

    #[test]
    fn builds_typed_properties() {
        let card = VCard::builder()
            .version("4.0")
            .formatted_name("John Doe")
            .name_parts(&StructuredName::simple("Doe", "John"))
            .telephone("+1-555-1234", &[TelType::Work, TelType::Voice])
            .telephone("+1-555-9876", &[TelType::Cell])
            .email("john@example.com", &[EmailType::Internet])
            .build();

        assert_eq!(card.version(), Some("4.0"));
        assert_eq!(card.name().map(|n| n.display_name()), Some("John Doe".to_string()));
        assert_eq!(card.telephones().len(), 2);
        assert!(card.telephones()[0].has_type("voice"));
        assert!(card.emails()[0].has_type("internet"));
    }

    #[test]
    fn single_valued_setters_replace() {
        let card = VCardBuilder::new()
            .formatted_name("First")
            .formatted_name("Second")
            .build();

        assert_eq!(card.get_properties("FN").len(), 1);
        assert_eq!(card.formatted_name(), Some("Second"));
    }

    #[test]
    fn address_parts_recompose() {
        let address = Address {
            street: "123 Main St".into(),
            locality: "Anytown".into(),
            country: "USA".into(),
            ..Address::default()
        };

        let card = VCardBuilder::new()
            .address_parts(&address, &[AdrType::Home])
            .build();

        let adr = card.get_property("ADR").unwrap();
        assert_eq!(adr.value, ";;123 Main St;Anytown;;;USA");
        assert_eq!(card.addresses(), vec![address]);
    }

    #[test]
    fn built_card_round_trips() {
        let card = VCardBuilder::new()
            .version("4.0")
            .formatted_name("Jane Q. Public")
            .organization("ACME, Inc.")
            .title("Engineer")
            .note("Line one\nLine two")
            .url("https://example.com/jane")
            .uid("urn:uuid:4fbe8971-0bc3-424c-9c26-36c3e1eff6b1")
            .custom_property("x-mascot", "Road; Runner")
            .build();

        let reparsed = parse_single(&serialize_single(&card)).unwrap();
        assert_eq!(reparsed, card);
        assert_eq!(
            reparsed.get_property("X-MASCOT").map(|p| p.value.as_str()),
            Some("Road; Runner")
        );
    }
}

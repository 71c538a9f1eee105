//! vCard property types (RFC 6350).

use serde::Serialize;

use super::parameter::{VCardParameter, append_param_value};

/// A vCard property.
///
/// Holds the unescaped value; escaping happens only on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance, one entry per name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<VCardParameter>,
    /// Unescaped value.
    pub value: String,
}

impl VCardProperty {
    /// Creates a property with no group and no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a property with a group prefix.
    #[must_use]
    pub fn grouped(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::new(name, value)
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns all values of a parameter (empty if absent).
    #[must_use]
    pub fn get_param_values(&self, name: &str) -> &[String] {
        self.get_param(name).map_or(&[][..], |p| p.values.as_slice())
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns the PREF value if present (1-100, lower is preferred).
    #[must_use]
    pub fn pref(&self) -> Option<u8> {
        self.get_param_value("PREF").and_then(|v| v.parse().ok())
    }

    /// Appends a parameter value, accumulating under an existing name.
    pub fn add_param_value(&mut self, name: &str, value: impl Into<String>) {
        append_param_value(&mut self.params, name, value);
    }

    /// Appends every value of `param` under its name.
    pub fn add_param(&mut self, param: VCardParameter) {
        for value in param.values {
            append_param_value(&mut self.params, &param.name, value);
        }
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        self.add_param_value("TYPE", type_value);
    }

    /// Returns a copy of this property carrying a different value.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }
}

/// Common property names as constants.
pub mod names {
    // Identification properties
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const IMPP: &str = "IMPP";
    pub const LANG: &str = "LANG";

    // Geographical
    pub const TZ: &str = "TZ";
    pub const GEO: &str = "GEO";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const LOGO: &str = "LOGO";
    pub const ORG: &str = "ORG";
    pub const MEMBER: &str = "MEMBER";
    pub const RELATED: &str = "RELATED";

    // Explanatory
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const PRODID: &str = "PRODID";
    pub const REV: &str = "REV";
    pub const SOUND: &str = "SOUND";
    pub const UID: &str = "UID";
    pub const CLIENTPIDMAP: &str = "CLIENTPIDMAP";
    pub const URL: &str = "URL";

    // Security
    pub const KEY: &str = "KEY";

    // General/structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const SOURCE: &str = "SOURCE";
    pub const KIND: &str = "KIND";
}

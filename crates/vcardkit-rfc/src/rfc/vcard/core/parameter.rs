//! vCard parameter types (RFC 6350 §5).

use serde::Serialize;

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., `TYPE=home,work`). A property
/// holds at most one entry per name; repeated occurrences accumulate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values in order of appearance.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates a PREF parameter with priority (1-100).
    #[must_use]
    pub fn pref(priority: u8) -> Self {
        Self::new("PREF", priority.to_string())
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        Self::new("LANGUAGE", tag)
    }

    /// Creates a LABEL parameter (formatted address text).
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::new("LABEL", text)
    }
}

/// Appends `value` under `name`, extending an existing entry of that name.
pub(crate) fn append_param_value(
    params: &mut Vec<VCardParameter>,
    name: &str,
    value: impl Into<String>,
) {
    let name_upper = name.to_ascii_uppercase();
    if let Some(param) = params.iter_mut().find(|p| p.name == name_upper) {
        param.values.push(value.into());
    } else {
        params.push(VCardParameter {
            name: name_upper,
            values: vec![value.into()],
        });
    }
}

/// Common TYPE values as constants.
pub mod types {
    // Shared
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";

    // Telephone types
    pub const TEXT: &str = "text";
    pub const VOICE: &str = "voice";
    pub const FAX: &str = "fax";
    pub const CELL: &str = "cell";
    pub const VIDEO: &str = "video";
    pub const PAGER: &str = "pager";
    pub const TEXTPHONE: &str = "textphone";

    // Email types
    pub const INTERNET: &str = "internet";

    // Address types
    pub const POSTAL: &str = "postal";
    pub const PARCEL: &str = "parcel";
    pub const DOM: &str = "dom";
    pub const INTL: &str = "intl";
}

/// TYPE values accepted on TEL properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelType {
    Text,
    Voice,
    Fax,
    Cell,
    Video,
    Pager,
    TextPhone,
    Work,
    Home,
}

impl TelType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => types::TEXT,
            Self::Voice => types::VOICE,
            Self::Fax => types::FAX,
            Self::Cell => types::CELL,
            Self::Video => types::VIDEO,
            Self::Pager => types::PAGER,
            Self::TextPhone => types::TEXTPHONE,
            Self::Work => types::WORK,
            Self::Home => types::HOME,
        }
    }
}

/// TYPE values accepted on EMAIL properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailType {
    Work,
    Home,
    Internet,
}

impl EmailType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => types::WORK,
            Self::Home => types::HOME,
            Self::Internet => types::INTERNET,
        }
    }
}

/// TYPE values accepted on ADR properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdrType {
    Work,
    Home,
    Postal,
    Parcel,
    Dom,
    Intl,
}

impl AdrType {
    /// Returns the TYPE token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => types::WORK,
            Self::Home => types::HOME,
            Self::Postal => types::POSTAL,
            Self::Parcel => types::PARCEL,
            Self::Dom => types::DOM,
            Self::Intl => types::INTL,
        }
    }
}

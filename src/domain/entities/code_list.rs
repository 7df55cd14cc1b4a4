//! Code list record and the filter used to list code lists.

/// A code list as stored in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeListRecord {
    pub id: String,
    pub label: String,
    pub is_geography: bool,
    /// Number of codes summed over every edition of the code list, when the
    /// store computed it. A code present in two editions counts twice.
    /// Served as `number_of_results`.
    pub number_of_codes: Option<i64>,
}

impl CodeListRecord {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        is_geography: bool,
        number_of_codes: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_geography,
            number_of_codes,
        }
    }
}

/// Restricts which code lists a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeListFilter {
    #[default]
    All,
    Geography,
    NonGeography,
}

impl CodeListFilter {
    /// Parses the `type` query value. Empty or absent means no filtering.
    pub fn from_type(value: Option<&str>) -> Option<Self> {
        match value.unwrap_or("") {
            "" => Some(Self::All),
            "geography" => Some(Self::Geography),
            "non-geography" => Some(Self::NonGeography),
            _ => None,
        }
    }

    /// The `is_geography` value this filter selects, if any.
    pub fn is_geography(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Geography => Some(true),
            Self::NonGeography => Some(false),
        }
    }
}

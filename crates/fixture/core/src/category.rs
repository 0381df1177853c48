//! Two-level classification hierarchy for fixtures.

/// Top-level classification tag, e.g. "Football".
///
/// Identity is the numeric `id`; `reference` is the display and filter key
/// (serialized as `ref`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    id: i32,
    #[cfg_attr(feature = "serde", serde(rename = "ref"))]
    reference: String,
}

impl Category {
    pub fn new(id: i32, reference: impl Into<String>) -> Self {
        Self {
            id,
            reference: reference.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}

/// Second-level classification, e.g. "Premier League" within "Football".
///
/// Owns exactly one [`Category`]. Field order matters for serialization:
/// `id`, `ref`, `category`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubCategory {
    id: i32,
    #[cfg_attr(feature = "serde", serde(rename = "ref"))]
    reference: String,
    category: Category,
}

impl SubCategory {
    pub fn new(id: i32, reference: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            reference: reference.into(),
            category,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

//! Betting market kinds attachable to a fixture.

/// A named betting market kind, e.g. "Over/Under".
///
/// Equality covers both fields, so two markets sharing a name but not an id
/// are distinct when attaching or detaching.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarketRefType {
    market_ref_id: i32,
    market_ref_name: String,
}

impl MarketRefType {
    pub fn new(market_ref_id: i32, market_ref_name: impl Into<String>) -> Self {
        Self {
            market_ref_id,
            market_ref_name: market_ref_name.into(),
        }
    }

    pub fn market_ref_id(&self) -> i32 {
        self.market_ref_id
    }

    pub fn market_ref_name(&self) -> &str {
        &self.market_ref_name
    }
}

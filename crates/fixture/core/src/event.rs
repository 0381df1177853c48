//! The fixture entity and its identifier.
use std::fmt;

use crate::category::{Category, SubCategory};
use crate::market::MarketRefType;

/// Unique identifier of a fixture in a registry.
///
/// Ordering is numeric, which is the enumeration order registries expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventId(pub i32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EventId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A schedulable sporting fixture.
///
/// Immutable once constructed. Updates go through the copy constructors
/// ([`Event::completed_copy`], [`Event::with_market_ref_types`]) which leave
/// the original untouched for any holder of it.
///
/// Serialized field order is `id`, `name`, `subCategory`, `marketRefTypes`,
/// `completed`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Event {
    id: EventId,
    name: String,
    sub_category: SubCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    market_ref_types: Vec<MarketRefType>,
    #[cfg_attr(feature = "serde", serde(default))]
    completed: bool,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        name: impl Into<String>,
        sub_category: SubCategory,
        market_ref_types: Vec<MarketRefType>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sub_category,
            market_ref_types,
            completed,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sub_category(&self) -> &SubCategory {
        &self.sub_category
    }

    /// Category owning this event's sub-category.
    pub fn category(&self) -> &Category {
        self.sub_category.category()
    }

    /// Supported markets in attachment order.
    pub fn market_ref_types(&self) -> &[MarketRefType] {
        &self.market_ref_types
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns true if any supported market carries the given name.
    pub fn supports_market(&self, market_ref_name: &str) -> bool {
        self.market_ref_types
            .iter()
            .any(|market| market.market_ref_name() == market_ref_name)
    }

    /// Returns true if `market` (by value) is among the supported markets.
    pub fn has_market(&self, market: &MarketRefType) -> bool {
        self.market_ref_types.contains(market)
    }

    /// New instance identical to this one except `completed = true`.
    pub fn completed_copy(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }

    /// New instance identical to this one except for its market collection.
    pub fn with_market_ref_types(&self, market_ref_types: Vec<MarketRefType>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            sub_category: self.sub_category.clone(),
            market_ref_types,
            completed: self.completed,
        }
    }
}

//! Filter applied by the incomplete-event query.
use fixture_core::Event;

/// Conjunction of optional criteria; an unset criterion matches everything.
///
/// Completion is checked by the query itself, not here, so the same filter
/// can be reused for other scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub market_name: Option<String>,
}

impl EventFilter {
    /// A filter matching every event.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn from_refs(
        category: Option<&str>,
        sub_category: Option<&str>,
        market_name: Option<&str>,
    ) -> Self {
        Self {
            category: category.map(str::to_owned),
            sub_category: sub_category.map(str::to_owned),
            market_name: market_name.map(str::to_owned),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn market_name(mut self, market_name: impl Into<String>) -> Self {
        self.market_name = Some(market_name.into());
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        let category_matches = self
            .category
            .as_deref()
            .is_none_or(|category| event.category().reference() == category);
        let sub_category_matches = self
            .sub_category
            .as_deref()
            .is_none_or(|sub_category| event.sub_category().reference() == sub_category);
        let market_matches = self
            .market_name
            .as_deref()
            .is_none_or(|market_name| event.supports_market(market_name));

        category_matches && sub_category_matches && market_matches
    }
}

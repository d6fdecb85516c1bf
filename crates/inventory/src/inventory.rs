//! The inventory updater.

use shelflife_core::DomainResult;

use crate::item::Item;
use crate::kind::NamePolicy;
use crate::rules;

/// Ordered collection of items aged together, one simulated day per call.
///
/// The inventory never adds, removes or reorders items; `advance_one_day`
/// mutates them in place and hands back the same slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    days_elapsed: u32,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    /// Build from `(name, sell_in, quality)` triples under the given name policy.
    pub fn from_triples<I, S>(triples: I, policy: NamePolicy) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, i32, i32)>,
        S: Into<String>,
    {
        let items = triples
            .into_iter()
            .map(|(name, sell_in, quality)| Item::try_new(name, sell_in, quality, policy))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(items))
    }

    /// Age every item by one day and return the (same) items.
    pub fn advance_one_day(&mut self) -> &[Item] {
        self.days_elapsed += 1;
        let span = tracing::debug_span!(
            "advance_one_day",
            day = self.days_elapsed,
            items = self.items.len()
        );
        let _guard = span.enter();

        for item in &mut self.items {
            let aged = rules::age_one_day(item);

            if aged.legendary_expired {
                tracing::warn!(
                    name = item.name(),
                    sell_in = item.sell_in(),
                    quality_before = aged.quality_before,
                    "legendary item stocked past its sell-by date; quality zeroed"
                );
            }

            tracing::trace!(
                name = item.name(),
                kind = %item.kind(),
                sell_in_before = aged.sell_in_before,
                sell_in = item.sell_in(),
                quality_before = aged.quality_before,
                quality = item.quality(),
                "item aged"
            );
        }

        &self.items
    }

    /// Number of `advance_one_day` calls so far.
    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

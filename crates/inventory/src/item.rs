use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult};

use crate::kind::{ItemKind, NamePolicy};
use crate::thresholds::{MAX_QUALITY, MIN_QUALITY};

/// A stocked item: name, days left to sell, and current quality.
///
/// The name and kind are fixed at construction; only `sell_in` and `quality`
/// change as the inventory ages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    kind: ItemKind,
}

/// Wire shape accepted when deserializing items. The kind is always
/// re-derived from the name rather than trusted from input.
#[derive(Debug, Clone, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl Item {
    /// Build an item, classifying unknown names as normal.
    ///
    /// Accepts any values, including negative `sell_in` or out-of-range quality.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let kind = ItemKind::from_name(&name).unwrap_or(ItemKind::Normal);
        Self {
            name,
            sell_in,
            quality,
            kind,
        }
    }

    /// Checked construction.
    ///
    /// With [`NamePolicy::Strict`] the name must classify cleanly and a
    /// non-legendary item must start with quality inside `[0, 50]`.
    pub fn try_new(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
        policy: NamePolicy,
    ) -> DomainResult<Self> {
        let name = name.into();
        let kind = ItemKind::classify(&name, policy)?;

        if policy == NamePolicy::Strict
            && !kind.is_legendary()
            && !(MIN_QUALITY..=MAX_QUALITY).contains(&quality)
        {
            return Err(DomainError::invariant(format!(
                "quality {quality} outside [{MIN_QUALITY}, {MAX_QUALITY}] for {name:?}"
            )));
        }

        Ok(Self {
            name,
            sell_in,
            quality,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    pub(crate) fn set_sell_in(&mut self, sell_in: i32) {
        self.sell_in = sell_in;
    }

    pub(crate) fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

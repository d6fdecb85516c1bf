//! Item classification.
//!
//! The kind of an item is decided once, from its name, when the item is
//! constructed. Aging then dispatches on the kind and never compares strings.

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, ValueObject};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Closed set of aging behaviors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Loses one point per day, two once expired.
    Normal,
    /// Gains quality as it ages, including past its sell-by date.
    AgedBrie,
    /// Gains quality in tiers as the concert approaches; worthless afterwards.
    BackstagePass,
    /// Never sold, never degrades.
    Legendary,
    /// Degrades twice as fast as a normal item.
    Conjured,
}

impl ValueObject for ItemKind {}

/// What to do with a name that matches none of the special kinds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamePolicy {
    /// Unknown names age as [`ItemKind::Normal`].
    #[default]
    Lenient,
    /// Blank names, and names that resemble a special kind without matching
    /// it exactly, are rejected instead of silently aging as normal.
    Strict,
}

impl ItemKind {
    /// Exact-match lookup of the special names. `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            AGED_BRIE => Some(Self::AgedBrie),
            BACKSTAGE_PASS => Some(Self::BackstagePass),
            SULFURAS => Some(Self::Legendary),
            CONJURED_MANA_CAKE => Some(Self::Conjured),
            _ => None,
        }
    }

    pub fn classify(name: &str, policy: NamePolicy) -> DomainResult<Self> {
        match (Self::from_name(name), policy) {
            (Some(kind), _) => Ok(kind),
            (None, NamePolicy::Lenient) => Ok(Self::Normal),
            (None, NamePolicy::Strict) if name.trim().is_empty() => {
                Err(DomainError::validation("name cannot be empty"))
            }
            (None, NamePolicy::Strict) if resembles_special(name) => {
                Err(DomainError::misspelled_item(name))
            }
            (None, NamePolicy::Strict) => Ok(Self::Normal),
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }
}

// Case-insensitive prefixes that only the special kinds are expected to use.
const SPECIAL_PREFIXES: [&str; 4] = ["aged brie", "backstage pass", "sulfuras", "conjured"];

fn resembles_special(name: &str) -> bool {
    let lowered = name.trim().to_lowercase();
    SPECIAL_PREFIXES.iter().any(|p| lowered.starts_with(p))
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ItemKind::Normal => "normal",
            ItemKind::AgedBrie => "aged_brie",
            ItemKind::BackstagePass => "backstage_pass",
            ItemKind::Legendary => "legendary",
            ItemKind::Conjured => "conjured",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_names_match_exactly() {
        assert_eq!(ItemKind::from_name("Aged Brie"), Some(ItemKind::AgedBrie));
        assert_eq!(
            ItemKind::from_name("Backstage passes to a TAFKAL80ETC concert"),
            Some(ItemKind::BackstagePass)
        );
        assert_eq!(
            ItemKind::from_name("Sulfuras, Hand of Ragnaros"),
            Some(ItemKind::Legendary)
        );
        assert_eq!(
            ItemKind::from_name("Conjured Mana Cake"),
            Some(ItemKind::Conjured)
        );

        assert_eq!(ItemKind::from_name("aged brie"), None);
        assert_eq!(ItemKind::from_name("Aged Brie "), None);
        assert_eq!(ItemKind::from_name("Sulfuras"), None);
    }

    #[test]
    fn lenient_policy_maps_unknown_names_to_normal() {
        let kind = ItemKind::classify("+5 Dexterity Vest", NamePolicy::Lenient).unwrap();
        assert_eq!(kind, ItemKind::Normal);

        let kind = ItemKind::classify("", NamePolicy::Lenient).unwrap();
        assert_eq!(kind, ItemKind::Normal);
    }

    #[test]
    fn strict_policy_rejects_near_misses() {
        for name in ["aged brie", "Sulfuras", "Backstage passes to a Metallica concert", "Conjured Ale"] {
            let err = ItemKind::classify(name, NamePolicy::Strict).unwrap_err();
            match err {
                DomainError::MisspelledItem(n) => assert_eq!(n, name),
                _ => panic!("Expected MisspelledItem error for {name}"),
            }
        }

        let err = ItemKind::classify("   ", NamePolicy::Strict).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }

        assert_eq!(
            ItemKind::classify("Aged Brie", NamePolicy::Strict).unwrap(),
            ItemKind::AgedBrie
        );
        assert_eq!(
            ItemKind::classify("Elixir of the Mongoose", NamePolicy::Strict).unwrap(),
            ItemKind::Normal
        );
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ItemKind::BackstagePass).unwrap();
        assert_eq!(json, "\"backstage_pass\"");
        assert_eq!(ItemKind::BackstagePass.to_string(), "backstage_pass");
    }
}

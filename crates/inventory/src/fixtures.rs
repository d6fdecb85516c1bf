//! Standard starting stock used by the simulator, tests and benches.

use crate::item::Item;
use crate::kind::{AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, SULFURAS};
use crate::thresholds::LEGENDARY_QUALITY;

/// The shop's opening inventory.
pub fn standard_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new(CONJURED_MANA_CAKE, 3, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemKind;

    #[test]
    fn standard_stock_covers_every_kind() {
        let stock = standard_stock();
        for kind in [
            ItemKind::Normal,
            ItemKind::AgedBrie,
            ItemKind::BackstagePass,
            ItemKind::Legendary,
            ItemKind::Conjured,
        ] {
            assert!(stock.iter().any(|i| i.kind() == kind), "missing {kind}");
        }
    }
}

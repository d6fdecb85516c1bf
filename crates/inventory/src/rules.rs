//! Daily aging rules.
//!
//! One simulated day runs three steps per item, in order:
//!
//! 1. adjust quality against the current `sell_in`;
//! 2. count `sell_in` down (never below zero, never for the legendary item);
//! 3. if `sell_in` is now negative, apply the post-expiry correction.
//!
//! Every increment and decrement clamps to `[MIN_QUALITY, MAX_QUALITY]`
//! individually, so an item that starts outside that range is only pulled
//! back toward it by a step that actually moves it.

use crate::item::Item;
use crate::kind::ItemKind;
use crate::thresholds::{
    BACKSTAGE_FIRST_TIER, BACKSTAGE_SECOND_TIER, CONJURED_DEGRADATION, EXPIRED_DEGRADATION,
    MAX_QUALITY, MIN_QUALITY, MIN_SELL_IN, NORMAL_DEGRADATION,
};

/// What happened to a single item during one day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Aged {
    pub(crate) sell_in_before: i32,
    pub(crate) quality_before: i32,
    /// The legendary item had its quality zeroed by the expiry rule.
    pub(crate) legendary_expired: bool,
}

pub(crate) fn age_one_day(item: &mut Item) -> Aged {
    let kind = item.kind();
    let sell_in_before = item.sell_in();
    let quality_before = item.quality();

    let quality = adjust_quality(kind, sell_in_before, quality_before);
    let sell_in = count_down(kind, sell_in_before);

    let (quality, legendary_expired) = if sell_in < MIN_SELL_IN {
        after_expiry(kind, quality)
    } else {
        (quality, false)
    };

    item.set_sell_in(sell_in);
    item.set_quality(quality);

    Aged {
        sell_in_before,
        quality_before,
        legendary_expired,
    }
}

fn adjust_quality(kind: ItemKind, sell_in: i32, quality: i32) -> i32 {
    match kind {
        ItemKind::Normal => degrade(quality, NORMAL_DEGRADATION),
        ItemKind::Conjured => degrade(quality, CONJURED_DEGRADATION),
        ItemKind::AgedBrie => appreciate(quality),
        ItemKind::BackstagePass => {
            let mut quality = appreciate(quality);
            if sell_in < BACKSTAGE_FIRST_TIER {
                quality = appreciate(quality);
            }
            if sell_in < BACKSTAGE_SECOND_TIER {
                quality = appreciate(quality);
            }
            quality
        }
        ItemKind::Legendary => quality,
    }
}

fn count_down(kind: ItemKind, sell_in: i32) -> i32 {
    if kind.is_legendary() || sell_in <= MIN_SELL_IN {
        sell_in
    } else {
        sell_in - 1
    }
}

fn after_expiry(kind: ItemKind, quality: i32) -> (i32, bool) {
    match kind {
        ItemKind::AgedBrie => (appreciate(quality), false),
        ItemKind::BackstagePass => (MIN_QUALITY, false),
        // Only reachable when the item was stocked with a negative sell_in.
        // The legendary item then loses all of its quality, once.
        ItemKind::Legendary => (MIN_QUALITY, true),
        ItemKind::Normal | ItemKind::Conjured => {
            if quality > MIN_QUALITY {
                (degrade(quality, EXPIRED_DEGRADATION), false)
            } else {
                (MIN_QUALITY, false)
            }
        }
    }
}

/// Lower quality by `amount`, floored at `MIN_QUALITY`. No-op at or below the floor.
fn degrade(quality: i32, amount: i32) -> i32 {
    if quality > MIN_QUALITY {
        (quality - amount).max(MIN_QUALITY)
    } else {
        quality
    }
}

/// Raise quality by one, capped at `MAX_QUALITY`. No-op at or above the cap.
fn appreciate(quality: i32) -> i32 {
    if quality < MAX_QUALITY {
        (quality + 1).min(MAX_QUALITY)
    } else {
        quality
    }
}

//! Fixed aging thresholds.
//!
//! These are compile-time constants; there is no runtime override.

/// Lowest quality an ordinary item can degrade to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an ordinary item can be raised to.
pub const MAX_QUALITY: i32 = 50;

/// `sell_in` is not decremented once it has reached this value.
pub const MIN_SELL_IN: i32 = 0;

/// Backstage passes gain an extra point while `sell_in` is below this.
pub const BACKSTAGE_FIRST_TIER: i32 = 11;

/// Backstage passes gain a third point while `sell_in` is below this.
pub const BACKSTAGE_SECOND_TIER: i32 = 6;

/// Daily quality loss of a normal item.
pub const NORMAL_DEGRADATION: i32 = 1;

/// Daily quality loss of a conjured item (twice the normal rate).
pub const CONJURED_DEGRADATION: i32 = 2 * NORMAL_DEGRADATION;

/// Additional daily loss once an item is past its sell-by date.
pub const EXPIRED_DEGRADATION: i32 = 1;

/// Quality the legendary item is conventionally stocked at.
pub const LEGENDARY_QUALITY: i32 = 80;

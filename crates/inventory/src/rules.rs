//! Aging rules.
//!
//! Each rule is a stateless function of `(sell_in, quality) -> quality`, where
//! `sell_in` is the value before the nightly decrement. Rules may push quality
//! out of `[MIN_QUALITY, MAX_QUALITY]`; the caller clamps once afterwards.

/// Lower bound for the quality of non-legendary items.
pub const MIN_QUALITY: i32 = 0;

/// Upper bound for the quality of non-legendary items.
pub const MAX_QUALITY: i32 = 50;

/// A category's aging rule: `(sell_in, quality) -> quality`.
pub type Rule = fn(i32, i32) -> i32;

fn past_sell_by(sell_in: i32) -> bool {
    sell_in <= 0
}

/// Degrades by 1 per day, twice as fast once the sell-by date has passed.
pub fn normal(sell_in: i32, quality: i32) -> i32 {
    let decrement = if past_sell_by(sell_in) { 2 } else { 1 };
    quality.saturating_sub(decrement)
}

/// Improves by 1 per day, twice as fast once the sell-by date has passed.
pub fn aging_improves(sell_in: i32, quality: i32) -> i32 {
    let quality = quality.saturating_add(1);
    if past_sell_by(sell_in) {
        quality.saturating_add(1)
    } else {
        quality
    }
}

/// Improves as the event approaches and is worthless once it has happened.
pub fn event_ticket(sell_in: i32, quality: i32) -> i32 {
    match sell_in {
        i32::MIN..=0 => 0,
        1..=5 => quality.saturating_add(3),
        6..=10 => quality.saturating_add(2),
        _ => quality.saturating_add(1),
    }
}

/// Degrades twice as fast as a normal item.
pub fn conjured(sell_in: i32, quality: i32) -> i32 {
    let decrement = if past_sell_by(sell_in) { 4 } else { 2 };
    quality.saturating_sub(decrement)
}

/// Never changes.
pub fn legendary(_sell_in: i32, quality: i32) -> i32 {
    quality
}

/// Clamp a quality value into `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

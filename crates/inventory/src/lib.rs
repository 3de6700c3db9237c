//! Inventory aging domain module.
//!
//! This crate contains the nightly update of a shop's stock, implemented purely
//! as deterministic domain logic (no IO, no persistence, no concurrency).
//!
//! ```
//! use gildedrose_inventory::{GildedRose, Item};
//!
//! let mut shop = GildedRose::new(vec![Item::new("Aged Brie", 2, 0)]);
//! let items = shop.update_quality();
//! assert_eq!((items[0].sell_in(), items[0].quality()), (1, 1));
//! ```

pub mod category;
pub mod item;
pub mod rules;
pub mod shop;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, Category, SULFURAS};
pub use item::Item;
pub use rules::{MAX_QUALITY, MIN_QUALITY, Rule, clamp_quality};
pub use shop::GildedRose;

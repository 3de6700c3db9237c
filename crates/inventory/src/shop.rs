//! Update engine: advances the whole inventory by one day.

use gildedrose_core::find_by_id;

use crate::item::Item;

/// The shop's inventory and its nightly update.
///
/// The engine owns its items. Callers read the aged items back from
/// [`GildedRose::update_quality`], [`GildedRose::items`] or
/// [`GildedRose::into_items`]; order is always preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// First item with the given name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        find_by_id(&self.items, name)
    }

    /// Advance every item by one day and return the updated collection.
    ///
    /// Total over its input: any names and any integer `sell_in`/`quality`
    /// are accepted, and every item is processed.
    pub fn update_quality(&mut self) -> &[Item] {
        let _span = tracing::debug_span!("update_quality", items = self.items.len()).entered();

        for item in &mut self.items {
            let (sell_in, quality) = (item.sell_in(), item.quality());
            item.advance_day();
            tracing::debug!(
                name = item.name(),
                category = %item.category(),
                sell_in_before = sell_in,
                quality_before = quality,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
        }

        &self.items
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

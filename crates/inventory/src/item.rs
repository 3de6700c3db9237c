use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, Entity};

use crate::category::Category;
use crate::rules::{MAX_QUALITY, MIN_QUALITY, clamp_quality};

/// A stock item: identity plus the two attributes that age overnight.
///
/// `name` and `category` are fixed at construction; only `sell_in` and
/// `quality` change, and only through [`Item::advance_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    category: Category,
}

/// Wire shape accepted on deserialization; `category` may be omitted.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
    #[serde(default)]
    category: Option<Category>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let category = record
            .category
            .unwrap_or_else(|| Category::from_name(&record.name));
        Item::with_category(record.name, category, record.sell_in, record.quality)
    }
}

impl Item {
    /// Create an item whose category is derived from its name.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    /// Create an item with an explicit category, independent of its name.
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        sell_in: i32,
        quality: i32,
    ) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
            category,
        }
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

    pub fn category(&self) -> Category {
        self.category
    }

    /// Age the item by one day.
    ///
    /// The category rule sees the `sell_in` from before today's decrement.
    /// Exempt categories stop after the rule; everyone else loses a day and
    /// has quality clamped into range.
    pub fn advance_day(&mut self) {
        self.quality = (self.category.rule())(self.sell_in, self.quality);

        if self.category.is_exempt_from_post_processing() {
            return;
        }

        self.sell_in = self.sell_in.saturating_sub(1);
        self.quality = clamp_quality(self.quality);
    }

    /// Check the quality bound for categories that are clamped nightly.
    pub fn check_invariants(&self) -> DomainResult<()> {
        if self.category.is_exempt_from_post_processing() {
            return Ok(());
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::invariant(format!(
                "quality of {:?} is {} (expected {MIN_QUALITY}..={MAX_QUALITY})",
                self.name, self.quality
            )));
        }
        Ok(())
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

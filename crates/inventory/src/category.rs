use core::str::FromStr;
use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

use crate::rules::{self, Rule};

/// Legacy name of the aging-improves item.
pub const AGED_BRIE: &str = "Aged Brie";
/// Legacy name of the event-ticket item.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Legacy name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Legacy name of the conjured item.
pub const CONJURED: &str = "Conjured";

/// Aging behaviour class of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Normal,
    AgingImproves,
    EventTicket,
    Conjured,
    Legendary,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::AgingImproves,
        Category::EventTicket,
        Category::Conjured,
        Category::Legendary,
    ];

    /// Derive the category from a legacy item name.
    ///
    /// Matching is exact; anything unrecognized is `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgingImproves,
            BACKSTAGE_PASSES => Category::EventTicket,
            SULFURAS => Category::Legendary,
            CONJURED => Category::Conjured,
            _ => Category::Normal,
        }
    }

    /// The aging rule applied to items of this category.
    pub fn rule(self) -> Rule {
        match self {
            Category::Normal => rules::normal,
            Category::AgingImproves => rules::aging_improves,
            Category::EventTicket => rules::event_ticket,
            Category::Conjured => rules::conjured,
            Category::Legendary => rules::legendary,
        }
    }

    /// Whether items of this category skip the nightly `sell_in` decrement and
    /// quality clamp.
    pub fn is_exempt_from_post_processing(self) -> bool {
        matches!(self, Category::Legendary)
    }

    /// Stable tag used in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgingImproves => "aging_improves",
            Category::EventTicket => "event_ticket",
            Category::Conjured => "conjured",
            Category::Legendary => "legendary",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category tag: {s}")))
    }
}

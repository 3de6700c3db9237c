//! Day-by-day simulation driver for the shop inventory.
//!
//! Seeds the standard stock list, advances it once per simulated day and
//! renders each day's listing as text or JSON.

use serde::Serialize;

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, GildedRose, Item, SULFURAS};

/// Number of day listings printed when none is given (days 0 and 1).
pub const DEFAULT_DAYS: u32 = 2;

/// Output format of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureArgs {
    /// Number of listings to print. Day 0 is the seed stock, so `days = N`
    /// prints days `0..N` and advances the inventory `N - 1` times.
    pub days: u32,
    pub format: OutputFormat,
}

impl Default for FixtureArgs {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::Text,
        }
    }
}

impl FixtureArgs {
    /// Parse `[DAYS] [--json]` (program name already stripped).
    pub fn parse<I, S>(args: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        let mut saw_days = false;

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--json" => parsed.format = OutputFormat::Json,
                _ if arg.starts_with('-') && arg.parse::<i64>().is_err() => {
                    return Err(DomainError::validation(format!("unknown flag: {arg}")));
                }
                _ if saw_days => {
                    return Err(DomainError::validation(format!(
                        "unexpected argument: {arg}"
                    )));
                }
                _ => {
                    parsed.days = arg.parse().map_err(|_| {
                        DomainError::validation(format!(
                            "day count must be a non-negative integer, got {arg:?}"
                        ))
                    })?;
                    saw_days = true;
                }
            }
        }

        Ok(parsed)
    }
}

/// The canonical seed stock.
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

/// Text listing for one day.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

/// JSON listing for one day.
#[derive(Debug, Serialize)]
pub struct DaySnapshot<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

/// Run the simulation, handing each day's rendered block to `emit` as soon as
/// it is produced.
///
/// Day 0 is the seed stock; each later day is one advancement further. Only
/// the current day is held in memory. An error from `emit` stops the run.
pub fn run<F, E>(args: &FixtureArgs, items: Vec<Item>, mut emit: F) -> Result<(), E>
where
    F: FnMut(String) -> Result<(), E>,
    E: From<serde_json::Error>,
{
    let mut shop = GildedRose::new(items);

    for day in 0..args.days {
        if day > 0 {
            shop.update_quality();
        }
        let block = match args.format {
            OutputFormat::Text => render_day(day, shop.items()),
            OutputFormat::Json => serde_json::to_string(&DaySnapshot {
                day,
                items: shop.items(),
            })?,
        };
        emit(block)?;
    }

    tracing::info!(days = args.days, items = shop.items().len(), "simulation finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let args = FixtureArgs::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args, FixtureArgs::default());
        assert_eq!(args.days, DEFAULT_DAYS);
    }

    #[test]
    fn parse_days_and_json_in_any_order() {
        let args = FixtureArgs::parse(["--json", "7"]).unwrap();
        assert_eq!(args.days, 7);
        assert_eq!(args.format, OutputFormat::Json);

        let args = FixtureArgs::parse(["3", "--json"]).unwrap();
        assert_eq!(args.days, 3);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in [vec!["-3"], vec!["abc"], vec!["--yaml"], vec!["1", "2"]] {
            let err = FixtureArgs::parse(bad.clone()).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for {bad:?}"),
            }
        }
    }

    #[test]
    fn render_day_lists_items_in_order() {
        let items = vec![Item::new("Elixir", 5, 7), Item::new(SULFURAS, 0, 80)];
        assert_eq!(
            render_day(0, &items),
            "-------- day 0 --------\nname, sellIn, quality\nElixir, 5, 7\nSulfuras, Hand of Ragnaros, 0, 80\n\n"
        );
    }

    #[test]
    fn run_prints_seed_then_advances() {
        let args = FixtureArgs {
            days: 2,
            format: OutputFormat::Text,
        };
        let mut blocks = Vec::new();
        run(&args, standard_inventory(), |block| {
            blocks.push(block);
            Ok::<_, serde_json::Error>(())
        })
        .unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("+5 Dexterity Vest, 10, 20"));
        assert!(blocks[1].starts_with("-------- day 1 --------"));
        assert!(blocks[1].contains("+5 Dexterity Vest, 9, 19"));
        assert!(blocks[1].contains("Aged Brie, 1, 1"));
        assert!(blocks[1].contains("Backstage passes to a TAFKAL80ETC concert, 4, 50"));
        assert!(blocks[1].contains("Sulfuras, Hand of Ragnaros, -1, 80"));
        assert!(blocks[1].contains("Conjured, 2, 4"));
    }

    #[test]
    fn run_json_emits_one_document_per_day() {
        let args = FixtureArgs {
            days: 3,
            format: OutputFormat::Json,
        };
        let mut blocks = Vec::new();
        run(&args, vec![Item::new(AGED_BRIE, 2, 0)], |block| {
            blocks.push(block);
            Ok::<_, serde_json::Error>(())
        })
        .unwrap();
        assert_eq!(blocks.len(), 3);

        let last: serde_json::Value = serde_json::from_str(&blocks[2]).unwrap();
        assert_eq!(last["day"], 2);
        assert_eq!(last["items"][0]["sell_in"], 0);
        assert_eq!(last["items"][0]["quality"], 2);
        assert_eq!(last["items"][0]["category"], "aging_improves");
    }

    #[test]
    fn default_args_print_seed_and_one_advanced_day() {
        let mut days = Vec::new();
        run(&FixtureArgs::default(), standard_inventory(), |block| {
            days.push(block.lines().next().unwrap_or_default().to_string());
            Ok::<_, serde_json::Error>(())
        })
        .unwrap();
        assert_eq!(days, ["-------- day 0 --------", "-------- day 1 --------"]);
    }

    #[test]
    fn zero_days_prints_nothing() {
        let args = FixtureArgs {
            days: 0,
            format: OutputFormat::Text,
        };
        let mut emitted = 0;
        run(&args, standard_inventory(), |_| {
            emitted += 1;
            Ok::<_, serde_json::Error>(())
        })
        .unwrap();
        assert_eq!(emitted, 0);
    }

    #[test]
    fn long_runs_stream_one_day_at_a_time() {
        let args = FixtureArgs {
            days: 200_000,
            format: OutputFormat::Text,
        };
        let mut emitted = 0u32;
        let mut last = String::new();
        run(&args, vec![Item::new("Elixir", 5, 7)], |block| {
            emitted += 1;
            last = block;
            Ok::<_, serde_json::Error>(())
        })
        .unwrap();

        assert_eq!(emitted, args.days);
        assert!(last.starts_with("-------- day 199999 --------"));
        assert!(last.contains("Elixir, -199994, 0"));
    }

    #[derive(Debug)]
    enum SinkError {
        Closed,
        Json,
    }

    impl From<serde_json::Error> for SinkError {
        fn from(_: serde_json::Error) -> Self {
            SinkError::Json
        }
    }

    #[test]
    fn first_day_is_emitted_before_later_days_are_computed() {
        let args = FixtureArgs {
            days: u32::MAX,
            format: OutputFormat::Text,
        };
        let mut first = None;
        let err = run(&args, standard_inventory(), |block| {
            first = Some(block);
            Err(SinkError::Closed)
        })
        .unwrap_err();

        assert!(matches!(err, SinkError::Closed));
        let first = first.unwrap();
        assert!(first.starts_with("-------- day 0 --------"));
        assert!(first.contains("+5 Dexterity Vest, 10, 20"));
    }
}

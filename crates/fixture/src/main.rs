use std::io::Write;

use anyhow::Context;

use gildedrose_fixture::{FixtureArgs, OutputFormat, run, standard_inventory};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let args = FixtureArgs::parse(std::env::args().skip(1)).context("invalid arguments")?;
    tracing::debug!(days = args.days, format = ?args.format, "starting simulation");

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());

    run(&args, standard_inventory(), |block| -> anyhow::Result<()> {
        match args.format {
            OutputFormat::Text => write!(out, "{block}"),
            OutputFormat::Json => writeln!(out, "{block}"),
        }
        .context("failed to write inventory")
    })
    .context("failed to render inventory")?;

    out.flush().context("failed to flush output")?;
    Ok(())
}

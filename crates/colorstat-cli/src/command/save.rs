use std::path::PathBuf;

use anyhow::Context;
use colorstat_stats::frequency::FrequencyTable;
use colorstat_store::{FrequencySink, json::JsonFileSink, sqlite::SqliteSink};

use crate::input::InputArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SaveArg {
    #[clap(flatten)]
    input: InputArg,
    #[clap(flatten)]
    sink: SinkArg,
}

#[derive(Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
struct SinkArg {
    /// SQLite database file (table `color_freq`)
    #[arg(long)]
    sqlite: Option<PathBuf>,
    /// JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

pub(crate) fn run(arg: &SaveArg) -> anyhow::Result<()> {
    let SaveArg { input, sink } = arg;
    let log = input.load()?;
    let table = FrequencyTable::from_sequence(log.sequence());

    let (mut sink, path) = match sink {
        SinkArg {
            sqlite: Some(path), ..
        } => (Box::new(SqliteSink::open(path)?) as Box<dyn FrequencySink>, path),
        SinkArg {
            json: Some(path), ..
        } => (Box::new(JsonFileSink::open(path)?) as Box<dyn FrequencySink>, path),
        SinkArg { .. } => anyhow::bail!("either --sqlite or --json is required"),
    };
    sink.upsert(&table)
        .with_context(|| format!("Failed to save frequencies to {}", path.display()))?;

    eprintln!(
        "Saved {} categories ({} observations) to {}",
        table.len(),
        table.total(),
        path.display()
    );
    Ok(())
}

use std::{fs, path::Path};

use anyhow::Context;
use colorstat_stats::observation::ObservationLog;

/// Color observations for one working week, used when no input file is given.
pub(crate) const SAMPLE_OBSERVATIONS: &str = "
MONDAY: GREEN, YELLOW, GREEN, BROWN, BLUE, PINK, BLUE, YELLOW, ORANGE, CREAM, ORANGE, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, GREEN
TUESDAY: ARSH, BROWN, GREEN, BROWN, BLUE, BLUE, BLEW, PINK, PINK, ORANGE, ORANGE, RED, WHITE, BLUE, WHITE, WHITE, BLUE, BLUE, BLUE
WEDNESDAY: GREEN, YELLOW, GREEN, BROWN, BLUE, PINK, RED, YELLOW, ORANGE, RED, ORANGE, RED, BLUE, BLUE, WHITE, BLUE, BLUE, WHITE, WHITE
THURSDAY: BLUE, BLUE, GREEN, WHITE, BLUE, BROWN, PINK, YELLOW, ORANGE, CREAM, ORANGE, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, GREEN
FRIDAY: GREEN, WHITE, GREEN, BROWN, BLUE, BLUE, BLACK, WHITE, ORANGE, RED, RED, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, WHITE
";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InputArg {
    /// Observation log with `LABEL: color, color, ...` lines (built-in sample week if omitted)
    #[arg(long)]
    input: Option<std::path::PathBuf>,
}

impl InputArg {
    pub(crate) fn load(&self) -> anyhow::Result<ObservationLog> {
        let log = match &self.input {
            Some(path) => load_log(path)?,
            None => ObservationLog::parse(SAMPLE_OBSERVATIONS),
        };
        tracing::debug!(observations = log.len(), "loaded observation log");
        Ok(log)
    }
}

fn load_log(path: &Path) -> anyhow::Result<ObservationLog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read observation log: {}", path.display()))?;
    Ok(ObservationLog::parse(&raw))
}

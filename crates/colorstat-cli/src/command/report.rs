use std::io::{self, Write as _};

use anyhow::Context;
use colorstat_stats::{category::Category, summary::FrequencySummary};
use serde::Serialize;

use crate::input::InputArg;

const DEFAULT_CATEGORY: &str = "RED";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    input: InputArg,
    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
    /// Category whose probability is reported (repeatable, defaults to RED)
    #[arg(long = "category")]
    categories: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a FrequencySummary,
    probabilities: Vec<(Category, f64)>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        input,
        json,
        categories,
    } = arg;
    let log = input.load()?;
    let summary = FrequencySummary::from_sequence(log.sequence());

    let probabilities = if categories.is_empty() {
        vec![probability_of(&summary, DEFAULT_CATEGORY)]
    } else {
        categories
            .iter()
            .map(|token| probability_of(&summary, token))
            .collect()
    };

    if *json {
        let report = JsonReport {
            summary: &summary,
            probabilities,
        };
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)
            .context("Failed to write JSON report to stdout")?;
        writeln!(stdout)?;
        return Ok(());
    }

    println!("Total observations: {}", summary.total);
    println!("Frequencies:");
    let mut ranked = summary.frequencies.iter().collect::<Vec<_>>();
    ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
    for (category, count) in ranked {
        println!("  {category}: {count}");
    }

    println!();
    println!(
        "Mode: {} ({} times)",
        join(&summary.mode.categories),
        summary.mode.count
    );
    println!("Median (by frequency rank): {}", join(&summary.median));
    println!(
        "Variance of counts (population): {:.6}",
        summary.population_variance
    );
    println!(
        "Variance of counts (sample): {:.6}",
        summary.sample_variance
    );
    for (category, probability) in &probabilities {
        println!(
            "Probability of {category}: {probability:.6} ({:.4}%)",
            probability * 100.0
        );
    }
    Ok(())
}

fn probability_of(summary: &FrequencySummary, token: &str) -> (Category, f64) {
    (Category::normalize(token), summary.probability(token))
}

fn join(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "-".to_owned();
    }
    categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

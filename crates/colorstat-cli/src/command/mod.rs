use clap::{Parser, Subcommand};

use self::{
    report::ReportArg,
    save::SaveArg,
    toolkit::{FibonacciArg, RandomBitsArg, SearchArg, TripleOnesArg},
};

mod report;
mod save;
mod toolkit;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print frequency statistics of an observation log
    Report(#[clap(flatten)] ReportArg),
    /// Save the frequency table to a SQLite database or JSON file
    Save(#[clap(flatten)] SaveArg),
    /// Recursive linear and binary search over integers
    Search(#[clap(flatten)] SearchArg),
    /// Draw a random 4-bit binary number
    RandomBits(#[clap(flatten)] RandomBitsArg),
    /// Sum the first N Fibonacci numbers
    Fibonacci(#[clap(flatten)] FibonacciArg),
    /// Mark positions ending a run of three 1s
    TripleOnes(#[clap(flatten)] TripleOnesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Save(arg) => save::run(&arg)?,
        Mode::Search(arg) => toolkit::run_search(&arg),
        Mode::RandomBits(arg) => toolkit::run_random_bits(&arg),
        Mode::Fibonacci(arg) => toolkit::run_fibonacci(&arg)?,
        Mode::TripleOnes(arg) => toolkit::run_triple_ones(&arg),
    }
    Ok(())
}

use std::borrow::Cow;

use anyhow::bail;
use colorstat_toolkit::{
    bits::random_4bit_binary,
    fibonacci::sum_first_n_fibonacci,
    pattern::sliding_triple_ones,
    search::{recursive_binary_search, recursive_linear_search},
};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

const DEFAULT_TRIPLE_ONES_INPUT: &str = "0101101011101011011101101000111";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Value to look for
    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    target: i64,
    /// Treat the values as already sorted ascending and search them as given
    #[arg(long)]
    sorted: bool,
    /// Values to search
    #[arg(default_values_t = [3, 7, 2, 9, 11], allow_negative_numbers = true)]
    values: Vec<i64>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RandomBitsArg {
    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FibonacciArg {
    /// Number of terms, starting at F(0) = 0
    #[arg(default_value_t = 50)]
    n: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TripleOnesArg {
    /// Bit string to scan
    #[arg(default_value = DEFAULT_TRIPLE_ONES_INPUT)]
    bits: String,
}

pub(crate) fn run_search(arg: &SearchArg) {
    let SearchArg {
        target,
        sorted,
        values,
    } = arg;
    println!(
        "Recursive linear search: {values:?} target {target} -> {}",
        format_index(recursive_linear_search(values, target))
    );

    let haystack = binary_search_input(values, *sorted);
    println!(
        "Recursive binary search: {haystack:?} target {target} -> {}",
        format_index(recursive_binary_search(&haystack, target))
    );
}

pub(crate) fn run_random_bits(arg: &RandomBitsArg) {
    let sample = match arg.seed {
        Some(seed) => random_4bit_binary(&mut Pcg32::seed_from_u64(seed)),
        None => random_4bit_binary(&mut rand::rng()),
    };
    println!("{} -> {}", sample.bits, sample.value);
}

pub(crate) fn run_fibonacci(arg: &FibonacciArg) -> anyhow::Result<()> {
    let FibonacciArg { n } = *arg;
    let Some(sum) = sum_first_n_fibonacci(n) else {
        bail!("sum of the first {n} Fibonacci numbers does not fit in 128 bits");
    };
    println!("Sum of the first {n} Fibonacci numbers: {sum}");
    Ok(())
}

pub(crate) fn run_triple_ones(arg: &TripleOnesArg) {
    println!("input : {}", arg.bits);
    println!("output: {}", sliding_triple_ones(&arg.bits));
}

/// Values handed to binary search: as given when the caller vouches for their
/// order, otherwise a sorted copy.
fn binary_search_input(values: &[i64], already_sorted: bool) -> Cow<'_, [i64]> {
    if already_sorted {
        return Cow::Borrowed(values);
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Cow::Owned(sorted)
}

fn format_index(index: Option<usize>) -> String {
    index.map_or_else(|| "not found".to_owned(), |i| i.to_string())
}

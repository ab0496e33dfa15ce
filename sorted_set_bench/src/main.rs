/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Times repeated single-key membership queries against a `SortedSet`.
//!
//! Builds a set from random integers, then counts every key in the sampled
//! range for a number of rounds and prints the elapsed seconds.

use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorted_set::SortedSet;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Time `count` lookups over every key in a range")]
struct Args {
    /// Number of random values the set is built from.
    #[arg(long, value_name = "N", default_value_t = 2000)]
    samples: usize,

    /// Values are drawn from, and queried over, `0..RANGE`.
    #[arg(long, value_name = "RANGE", default_value_t = 1000)]
    range: u32,

    /// Number of passes over the whole range.
    #[arg(long, value_name = "N", default_value_t = 100)]
    rounds: u32,

    /// Seed for the value generator. Random when absent.
    #[arg(long)]
    seed: Option<u64>,
}

fn build_set(args: &Args) -> anyhow::Result<SortedSet<u32>> {
    if args.range == 0 {
        anyhow::bail!("--range must be positive");
    }
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok((0..args.samples)
        .map(|_| rng.gen_range(0..args.range))
        .collect())
}

/// Total number of hits across all rounds.
fn count_rounds(set: &SortedSet<u32>, range: u32, rounds: u32) -> usize {
    let mut hits = 0;
    for round in 0..rounds {
        let found: usize = (0..range).map(|i| set.count(&i)).sum();
        tracing::trace!(round, found, "finished round");
        hits += found;
    }
    hits
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    let set = build_set(&args).context("Failed to build the benchmark set")?;
    tracing::info!(
        samples = args.samples,
        distinct = set.len(),
        range = args.range,
        "built set"
    );

    let start = Instant::now();
    let hits = count_rounds(&set, args.range, args.rounds);
    let elapsed = start.elapsed();
    tracing::info!(rounds = args.rounds, hits, "done");

    println!("{}", elapsed.as_secs_f64());
    Ok(())
}

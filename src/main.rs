use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Context, Result};
use avl::{avl as balanced, keys, unbalanced};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. `info` so the seed of every run is reported.
const DEFAULT_LOG_FILTER: &str = "info";

/// Largest exponent whose key count `2^m - 1` still fits in an `i32` key.
const MAX_EXPONENT: u32 = 31;

#[derive(Parser, Debug)]
#[command(
    name = "avl-compare",
    about = "Compare insertion times of a plain BST, an AVL tree and BTreeSet"
)]
struct Cli {
    /// Smallest size exponent; each row inserts 2^m - 1 keys.
    #[arg(long, default_value_t = 10)]
    min_exponent: u32,
    /// Size exponent to stop before.
    #[arg(long, default_value_t = 16)]
    max_exponent: u32,
    /// Seed for the random keys. A fresh one is picked when absent. The seed in use is always
    /// logged at `info`, which the default log filter shows.
    #[arg(long)]
    seed: Option<u64>,
    /// How many times each batch is inserted into a fresh container. Timings are averaged.
    #[arg(long, default_value_t = 1)]
    repetitions: u32,
    /// Check every tree's contents against the BTreeSet after inserting.
    #[arg(long)]
    verify: bool,
}

/// Average insertion time per container for one key count.
#[derive(Debug)]
struct Row {
    size: usize,
    unbalanced: Duration,
    avl: Duration,
    best_case_avl: Duration,
    btree_set: Duration,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    validate(&cli)?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "seeding random keys, pass --seed {seed} to reproduce this run");
    let mut rng = StdRng::seed_from_u64(seed);

    println!("size\tbinary_tree\tavl_tree\tbestcase_avl\tstd_set");
    for exponent in cli.min_exponent..cli.max_exponent {
        let size = (1usize << exponent) - 1;
        let row = run_row(size, cli.repetitions, cli.verify, &mut rng)
            .with_context(|| format!("comparison failed for {size} keys"))?;
        debug!(size, ?row, "row finished");
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.size,
            row.unbalanced.as_nanos(),
            row.avl.as_nanos(),
            row.best_case_avl.as_nanos(),
            row.btree_set.as_nanos()
        );
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<()> {
    if cli.min_exponent >= cli.max_exponent {
        bail!(
            "--min-exponent ({}) must be smaller than --max-exponent ({})",
            cli.min_exponent,
            cli.max_exponent
        );
    }
    ensure!(
        cli.max_exponent <= MAX_EXPONENT + 1,
        "--max-exponent must be at most {} so keys fit in an i32",
        MAX_EXPONENT + 1
    );
    ensure!(cli.repetitions > 0, "--repetitions must be at least 1");
    Ok(())
}

/// Times every container on the same key batches. Random keys are drawn once per row so the
/// unbalanced tree, the AVL tree and the reference set all see identical input.
fn run_row<R: Rng>(size: usize, repetitions: u32, verify: bool, rng: &mut R) -> Result<Row> {
    let max_key = i32::try_from(size).context("key count does not fit in an i32")?;
    let random_keys = keys::random(size, max_key, rng);
    let best_case_keys = keys::best_case(size);

    let (unbalanced, plain) = time_batches(repetitions, || {
        random_keys.iter().copied().collect::<unbalanced::Tree<_>>()
    });
    let (avl, random_avl) = time_batches(repetitions, || {
        random_keys.iter().copied().collect::<balanced::Tree<_>>()
    });
    let (best_case_avl, best_avl) = time_batches(repetitions, || {
        best_case_keys.iter().copied().collect::<balanced::Tree<_>>()
    });
    let (btree_set, reference) = time_batches(repetitions, || {
        random_keys.iter().copied().collect::<BTreeSet<_>>()
    });
    debug!(
        size,
        distinct = reference.len(),
        avl_height = random_avl.height(),
        unbalanced_height = plain.height(),
        "batches inserted"
    );

    if verify {
        ensure!(
            plain.iter().eq(reference.iter()),
            "unbalanced tree disagrees with BTreeSet"
        );
        ensure!(
            random_avl.iter().eq(reference.iter()),
            "AVL tree disagrees with BTreeSet"
        );
        ensure!(
            best_avl.iter().copied().eq(1..=max_key),
            "best-case AVL tree is missing keys"
        );
    }

    Ok(Row {
        size,
        unbalanced,
        avl,
        best_case_avl,
        btree_set,
    })
}

/// Runs `build` `repetitions` times, returning the average duration and the last container
/// built. Dropping earlier containers happens outside the timed region.
fn time_batches<T>(repetitions: u32, mut build: impl FnMut() -> T) -> (Duration, T) {
    let mut total = Duration::ZERO;
    let mut last = None;
    for _ in 0..repetitions {
        drop(last.take());
        let start = Instant::now();
        let built = build();
        total += start.elapsed();
        last = Some(built);
    }
    // `repetitions` is validated to be non-zero, so `last` is always filled.
    let built = last.unwrap_or_else(&mut build);
    (total / repetitions, built)
}

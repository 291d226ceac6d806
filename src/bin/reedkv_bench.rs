// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! reedkv-bench: demo and benchmark driver for the `reedkv` B-tree index.
//!
//! Command-line interface, kept as a thin layer over the library: it
//! never touches `Tree` internals, only the public `btree` surface.

use clap::{Parser, Subcommand};
use reedkv::btree::{Order, Tree};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "reedkv-bench")]
#[command(author = "Vivian Voss <ask@vvoss.dev>")]
#[command(version = "0.1.0")]
#[command(about = "Demo and benchmark driver for the reedkv B-tree index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree from random keys and compare it against a linear scan
    Bench {
        /// Number of keys to insert
        #[arg(short = 'n', long, default_value_t = 10_000)]
        count: usize,

        /// B-tree order (fanout)
        #[arg(short, long, default_value_t = 128)]
        order: u16,

        /// Number of random point searches to time
        #[arg(short, long, default_value_t = 1_000)]
        searches: usize,

        /// PRNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Build a small tree and print its structure and statistics
    Demo {
        /// B-tree order (fanout)
        #[arg(short, long, default_value_t = 4)]
        order: u16,

        /// Keys to insert, in the order given
        #[arg(required = true)]
        keys: Vec<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            count,
            order,
            searches,
            seed,
        } => run_bench(count, order, searches, seed)?,
        Commands::Demo { order, keys } => run_demo(order, &keys)?,
    }

    Ok(())
}

/// Deterministic pseudo-random key generator.
///
/// `(rand() * rand() + i)` with a seeded generator, matching the
/// distribution shape of the reference C benchmark's key generator
/// without taking a dependency on `rand` for a one-off demo harness.
struct KeyGenerator {
    state: u64,
}

impl KeyGenerator {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(0x9E3779B97F4A7C15).wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        (self.state.wrapping_mul(0x2545F4914F6CDD1D) >> 32) as u32
    }

    fn next_key(&mut self, index: usize) -> i64 {
        let a = self.next_u32() as i64;
        let b = self.next_u32() as i64;
        a.wrapping_mul(b).wrapping_add(index as i64)
    }
}

fn run_bench(count: usize, order: u16, searches: usize, seed: u64) -> anyhow::Result<()> {
    let order = Order::new(order)?;
    let mut gen = KeyGenerator::new(seed);
    let keys: Vec<i64> = (0..count).map(|i| gen.next_key(i)).collect();

    println!("reedkv bench: {count} keys, order {}", order.value());

    let mut tree = Tree::create(order)?;
    let start = Instant::now();
    for (i, &key) in keys.iter().enumerate() {
        tree.insert(key, i)?;
    }
    let insert_elapsed = start.elapsed();

    let probes: Vec<i64> = (0..searches)
        .map(|i| keys[gen.next_u32() as usize % keys.len().max(1)] + (i as i64 % 2))
        .collect();

    let start = Instant::now();
    let mut hits = 0usize;
    for &key in &probes {
        if tree.search(key).0 {
            hits += 1;
        }
    }
    let btree_search_elapsed = start.elapsed();

    let start = Instant::now();
    let mut linear_hits = 0usize;
    for &key in &probes {
        if keys.iter().any(|&k| k == key) {
            linear_hits += 1;
        }
    }
    let linear_search_elapsed = start.elapsed();

    let stats = tree.stats();
    println!("insert:        {:?} ({count} keys)", insert_elapsed);
    println!(
        "btree search:  {:?} ({searches} probes, {hits} hits)",
        btree_search_elapsed
    );
    println!(
        "linear search: {:?} ({searches} probes, {linear_hits} hits)",
        linear_search_elapsed
    );
    println!(
        "speedup:       {:.1}x",
        linear_search_elapsed.as_secs_f64() / btree_search_elapsed.as_secs_f64().max(1e-12)
    );
    println!();
    println!("height:            {}", stats.height);
    println!("node_count:        {}", stats.node_count);
    println!("key_count:         {}", stats.key_count);
    println!("comparisons:       {}", stats.comparisons);
    println!("node_visits:       {}", stats.node_visits);
    println!("splits:            {}", stats.splits);
    println!("avg_fill_factor:   {:.3}", stats.avg_fill_factor);
    println!("tree valid:        {}", tree.validate());

    Ok(())
}

fn run_demo(order: u16, keys: &[i64]) -> anyhow::Result<()> {
    let order = Order::new(order)?;
    let mut tree = Tree::create(order)?;
    for (i, &key) in keys.iter().enumerate() {
        tree.insert(key, i)?;
    }

    println!("=== B-Tree Structure ===");
    print!("{}", tree.render());
    println!("========================");

    let stats = tree.stats();
    println!("height:          {}", stats.height);
    println!("node_count:      {}", stats.node_count);
    println!("key_count:       {}", stats.key_count);
    println!("avg_fill_factor: {:.3}", stats.avg_fill_factor);
    println!("valid:           {}", tree.validate());

    let mut cursor = tree.cursor();
    cursor.first();
    print!("in-order keys: ");
    while cursor.is_valid() {
        if let Some((key, _)) = cursor.get() {
            print!("{key} ");
        }
        if !cursor.next() {
            break;
        }
    }
    println!();

    Ok(())
}

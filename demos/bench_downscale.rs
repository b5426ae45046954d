//! Example: Time the three downsampling strategies on a raw sample dump
//!
//! Usage:
//!   cargo run --release --example bench_downscale -- [--iterations N] [--buckets N] [file]
//!
//! The file is a headerless little-endian f32 array (default: Corsair.dat).
//! The cost of an empty loop of the same length is measured first and
//! subtracted from every strategy's time.

use std::env;
use std::hint::black_box;
use std::time::Instant;

use stratum_overview::io::raw::read_raw_f32;
use stratum_overview::{downscale_with_config, DownscaleConfig, Strategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut iterations: usize = 100;
    let mut buckets: usize = 1000;
    let mut path = String::from("Corsair.dat");

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--iterations" | "-n" => {
                iterations = args
                    .first()
                    .ok_or("--iterations requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
            }
            "--buckets" | "-b" => {
                buckets = args
                    .first()
                    .ok_or("--buckets requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: bench_downscale [--iterations N] [--buckets N] [file]\n\
                     \n\
                     --iterations N   Timed calls per strategy (default: 100)\n\
                     --buckets N      Requested output length (default: 1000)\n"
                );
                return Ok(());
            }
            _ => path = a,
        }
    }

    let iterations = iterations.max(1);
    let samples = read_raw_f32(&path)?;
    println!("Loaded {} samples from {}", samples.len(), path);

    println!("START BENCHMARK");

    let start = Instant::now();
    for i in 0..iterations {
        black_box(i);
    }
    let loop_time = start.elapsed().as_secs_f64() * 1000.0;

    for strategy in Strategy::ALL {
        // Single-threaded, so the numbers compare the kernels only
        let config = DownscaleConfig {
            strategy,
            parallel_min_len: usize::MAX,
            ..DownscaleConfig::default()
        };

        let start = Instant::now();
        let mut chunks = 0;
        for _ in 0..iterations {
            chunks = black_box(downscale_with_config(black_box(&samples), buckets, &config)?).len();
        }
        let total = start.elapsed().as_secs_f64() * 1000.0;
        let per_iteration = (total - loop_time) / iterations as f64;

        println!(
            "{:<17} {:>8.3} ms  ({} chunks)",
            format!("{} time:", strategy.name()),
            per_iteration,
            chunks
        );
    }

    Ok(())
}

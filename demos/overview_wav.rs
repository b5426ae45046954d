//! Example: Print a JSON waveform overview of a WAV file
//!
//! Usage:
//!   cargo run --release --example overview_wav -- <file.wav> [buckets] [strategy]
//!
//! Only the first channel is used.

use std::env;

use stratum_overview::{DownscaleConfig, Overview, Strategy};

/// Load channel 0 of a WAV file as f32 samples in [-1.0, 1.0]
fn load_wav_channel0(path: &str) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok(interleaved.into_iter().step_by(channels).collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("Usage: overview_wav <file.wav> [buckets] [strategy]");
        std::process::exit(2);
    };

    let buckets = match args.get(1) {
        Some(v) => v.parse::<usize>()?,
        None => 1000,
    };
    let strategy = match args.get(2) {
        Some(v) => v.parse::<Strategy>()?,
        None => Strategy::VectorTree,
    };

    let samples = load_wav_channel0(path)?;
    let overview = Overview::build(&samples, buckets, &DownscaleConfig::with_strategy(strategy))?;

    println!("{}", serde_json::to_string(&overview)?);

    Ok(())
}

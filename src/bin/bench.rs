use anyhow::{anyhow, Result};
use clap::Parser;
use elman::{Activation, Rnn, Vector};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "elman-bench", version, about = "Benchmark Elman RNN forward steps on random weights")]
struct Args {
    /// Input vector length
    #[arg(long, default_value_t = 32)]
    input: usize,

    /// Hidden state length
    #[arg(long, default_value_t = 128)]
    hidden: usize,

    /// Output vector length
    #[arg(long, default_value_t = 16)]
    output: usize,

    /// Number of forward steps
    #[arg(long, default_value_t = 10_000)]
    steps: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Weight std-dev multiplier; weights ~ N(0, scale / sqrt(fan_in))
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// tanh or sigmoid
    #[arg(long, default_value = "tanh")]
    activation: Activation,
}

fn fill_normal(weights: &mut [f32], fan_in: usize, scale: f32, rng: &mut SmallRng) -> Result<()> {
    let std = scale / (fan_in.max(1) as f32).sqrt();
    let dist = Normal::new(0.0f32, std).map_err(|e| anyhow!("bad weight scale: {}", e))?;
    for w in weights { *w = dist.sample(rng); }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rnn = Rnn::with_activation(args.input, args.hidden, args.output, args.activation)?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    fill_normal(rnn.weight_ih_mut(), args.input, args.scale, &mut rng)?;
    fill_normal(rnn.weight_hh_mut(), args.hidden, args.scale, &mut rng)?;
    fill_normal(rnn.weight_ho_mut(), args.hidden, args.scale, &mut rng)?;
    info!("initialized {} parameters (seed={})", rnn.parameter_count(), args.seed);

    let mut x = Vector::zeros(args.input)?;
    let mut checksum = 0f64;
    let t0 = Instant::now();
    for _ in 0..args.steps {
        for v in x.as_mut_slice() { *v = rng.gen_range(-1.0f32..1.0); }
        let y = rnn.step(&x)?;
        checksum += y.as_slice().iter().map(|&v| v as f64).sum::<f64>();
    }
    let dt = t0.elapsed();
    let sps = if dt.as_secs_f64() > 0.0 { args.steps as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "steps={} params={} elapsed={:.3}s steps_per_sec={:.1} checksum={:.6}",
        args.steps, rnn.parameter_count(), dt.as_secs_f64(), sps, checksum
    );
    Ok(())
}

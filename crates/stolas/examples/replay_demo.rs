//! Hard-example replay on a stream with a stubborn outlier region.
//!
//! Trains two copies of the same linear model on a single pass: one bare,
//! one wrapped with hard-example replay. The replayed model revisits the
//! outlier region it keeps getting wrong and finishes with a better fit on
//! exactly those rows.
//!
//! Run with: cargo run --example replay_demo

use stolas::{
    Decay, HardSamplingRegressor, LinearRegression, Regressor, SamplerConfig, SgdConfig,
};

fn main() -> Result<(), stolas::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // y = 3x, except a rare regime where the slope flips.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for i in 0..2_000u32 {
        let x = (i % 100) as f32 / 100.0;
        let rare = i % 25 == 0;
        xs.push(vec![x, f32::from(rare as u8)]);
        ys.push(if rare { -3.0 * x } else { 3.0 * x });
    }

    let sgd = SgdConfig {
        learning_rate: 0.05,
        decay: Decay::Constant,
        l2: 0.0,
    };

    let mut bare = LinearRegression::with_config(2, sgd.clone())?;
    let mut replayed = HardSamplingRegressor::new(
        LinearRegression::with_config(2, sgd)?,
        SamplerConfig {
            capacity: 40,
            replay_probability: 0.3,
            seed: Some(42),
        },
    )?;

    for (x, y) in xs.iter().zip(&ys) {
        bare.learn_one(x, *y)?;
        replayed.learn_one(x, *y)?;
    }

    let mae = |predict: &dyn Fn(&Vec<f32>) -> f32| -> f32 {
        xs.iter()
            .zip(&ys)
            .filter(|(x, _)| x[1] == 1.0)
            .map(|(x, y)| (predict(x) - y).abs())
            .sum::<f32>()
            / xs.iter().filter(|x| x[1] == 1.0).count() as f32
    };

    let bare_mae = mae(&|x| bare.predict_one(x));
    let replayed_mae = mae(&|x| replayed.predict_one(x));

    println!("rare-regime MAE, single pass:");
    println!("  bare model:     {bare_mae:.4}");
    println!("  with replay:    {replayed_mae:.4}");
    println!(
        "  buffer: {} examples, {} replays over {} observations",
        replayed.buffer().len(),
        replayed.stats().replayed,
        replayed.stats().observed,
    );

    Ok(())
}

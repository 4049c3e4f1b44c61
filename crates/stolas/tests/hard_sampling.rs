//! End-to-end tests for hard-example replay around real models.
//!
//! These exercise the full stack: linear models from `stolas-linear`
//! wrapped by the samplers from `stolas-sampling`, fed through the stream
//! helpers, with seeded reproducibility across independent instances.

use stolas::{
    stream, BinaryClassifier, Classifier, Decay, HardSamplingBinaryClassifier,
    HardSamplingClassifier, HardSamplingRegressor, LinearRegression, LogisticRegression,
    Regressor, SamplerConfig, SgdConfig, SoftmaxRegression,
};

fn sampler_config(capacity: usize, p: f32, seed: u64) -> SamplerConfig {
    SamplerConfig {
        capacity,
        replay_probability: p,
        seed: Some(seed),
    }
}

fn constant_sgd(learning_rate: f32) -> SgdConfig {
    SgdConfig {
        learning_rate,
        decay: Decay::Constant,
        l2: 0.0,
    }
}

/// Synthetic regression stream: y = 2x0 - x1 + 0.5.
fn regression_stream(n: usize) -> (Vec<Vec<f32>>, Vec<f32>) {
    let xs: Vec<Vec<f32>> = (0..n)
        .map(|i| {
            let a = (i % 13) as f32 / 13.0;
            let b = (i % 7) as f32 / 7.0;
            vec![a, b]
        })
        .collect();
    let ys: Vec<f32> = xs.iter().map(|x| 2.0 * x[0] - x[1] + 0.5).collect();
    (xs, ys)
}

#[test]
fn test_wrapped_regressor_learns_the_target() {
    let (xs, ys) = regression_stream(600);
    let inner = LinearRegression::with_config(2, constant_sgd(0.1)).unwrap();
    let mut model = HardSamplingRegressor::new(inner, sampler_config(20, 0.2, 42)).unwrap();

    for (x, y) in stream::iter_shuffled(&xs, &ys, 5) {
        model.learn_one(x, *y).unwrap();
    }

    let mae: f32 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (model.predict_one(x) - y).abs())
        .sum::<f32>()
        / xs.len() as f32;
    assert!(mae < 0.15, "mae={mae}");
}

#[test]
fn test_identical_seeds_identical_trajectories() {
    let (xs, ys) = regression_stream(300);

    let build = || {
        let inner = LinearRegression::with_config(2, constant_sgd(0.05)).unwrap();
        HardSamplingRegressor::new(inner, sampler_config(10, 0.5, 123)).unwrap()
    };
    let mut a = build();
    let mut b = build();

    for (x, y) in stream::iter_rows(&xs, &ys) {
        a.learn_one(x, *y).unwrap();
        b.learn_one(x, *y).unwrap();
    }

    assert_eq!(a.model().weights(), b.model().weights());
    assert_eq!(a.model().intercept(), b.model().intercept());
    assert_eq!(a.buffer().losses(), b.buffer().losses());
    assert_eq!(a.stats().replayed, b.stats().replayed);
}

#[test]
fn test_different_seeds_diverge() {
    let (xs, ys) = regression_stream(300);

    let build = |seed| {
        let inner = LinearRegression::with_config(2, constant_sgd(0.05)).unwrap();
        HardSamplingRegressor::new(inner, sampler_config(10, 0.5, seed)).unwrap()
    };
    let mut a = build(1);
    let mut b = build(2);

    for (x, y) in stream::iter_rows(&xs, &ys) {
        a.learn_one(x, *y).unwrap();
        b.learn_one(x, *y).unwrap();
    }

    // Different replay choices must leave different fingerprints somewhere.
    assert!(
        a.model().weights() != b.model().weights()
            || a.stats().replayed != b.stats().replayed
            || a.buffer().losses() != b.buffer().losses()
    );
}

#[test]
fn test_every_observation_spends_one_training_step() {
    let (xs, ys) = regression_stream(250);

    for p in [0.0, 0.5, 1.0] {
        let inner = LinearRegression::with_config(2, constant_sgd(0.05)).unwrap();
        let mut model = HardSamplingRegressor::new(inner, sampler_config(10, p, 9)).unwrap();
        for (x, y) in stream::iter_rows(&xs, &ys) {
            model.learn_one(x, *y).unwrap();
        }

        // One fit per observation, split between the two branches.
        assert_eq!(model.model().n_seen(), xs.len() as u64);
        let stats = model.stats();
        assert_eq!(stats.replayed + stats.direct, xs.len() as u64);
        match p {
            0.0 => assert_eq!(stats.replayed, 0),
            1.0 => assert_eq!(stats.direct, 0),
            _ => {}
        }
    }
}

#[test]
fn test_wrapped_multiclass_classifier() {
    // Three separable clusters.
    let xs: Vec<Vec<f32>> = (0..300)
        .map(|i| match i % 3 {
            0 => vec![1.0, 0.0],
            1 => vec![0.0, 1.0],
            _ => vec![-1.0, -1.0],
        })
        .collect();
    let ys: Vec<usize> = (0..300).map(|i| i % 3).collect();

    let inner = SoftmaxRegression::with_config(2, 3, constant_sgd(0.5)).unwrap();
    let mut model = HardSamplingClassifier::new(inner, sampler_config(15, 0.3, 21)).unwrap();

    for (x, y) in stream::iter_shuffled(&xs, &ys, 8) {
        model.learn_one(x, y).unwrap();
    }

    assert_eq!(model.predict_one(&vec![1.0, 0.0]), Some(0));
    assert_eq!(model.predict_one(&vec![0.0, 1.0]), Some(1));
    assert_eq!(model.predict_one(&vec![-1.0, -1.0]), Some(2));
    assert!(model.buffer().len() <= 15);
}

#[test]
fn test_wrapped_binary_classifier() {
    let xs: Vec<Vec<f32>> = (0..200)
        .map(|i| if i % 2 == 0 { vec![1.0] } else { vec![-1.0] })
        .collect();
    let ys: Vec<bool> = (0..200).map(|i| i % 2 == 0).collect();

    let inner = LogisticRegression::with_config(1, constant_sgd(0.5)).unwrap();
    let mut model = HardSamplingBinaryClassifier::new(inner, sampler_config(10, 0.2, 17)).unwrap();

    for (x, y) in stream::iter_rows(&xs, &ys) {
        model.learn_one(x, y).unwrap();
    }

    assert!(model.predict_positive_one(&vec![1.0]) > 0.8);
    assert!(model.predict_positive_one(&vec![-1.0]) < 0.2);
}

#[test]
fn test_buffer_keeps_the_hardest_examples() {
    // One outlier region the linear model cannot fit: its examples should
    // dominate the buffer once the easy trend is learned.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for i in 0..400 {
        let x = (i % 20) as f32 / 20.0;
        xs.push(vec![x]);
        // Every 20th target jumps far off the line.
        ys.push(if i % 20 == 19 { 50.0 } else { x });
    }

    let inner = LinearRegression::with_config(1, constant_sgd(0.05)).unwrap();
    let mut model = HardSamplingRegressor::new(inner, sampler_config(8, 0.0, 4)).unwrap();

    for (x, y) in stream::iter_rows(&xs, &ys) {
        model.learn_one(x, *y).unwrap();
    }

    // Buffered targets should all come from the outlier region.
    let outliers = model
        .buffer()
        .iter()
        .filter(|entry| entry.target == 50.0)
        .count();
    assert_eq!(outliers, model.buffer().len());
}

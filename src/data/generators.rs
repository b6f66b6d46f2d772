//! Synthetic datasets for the two demo tasks.
//!
//! These live outside the network core: they only produce `Sample`s in the
//! ranges the demo topologies train well on.

use crate::data::dataset::Sample;
use crate::random::RandomSource;

/// Unit-conversion pairs (e.g. km → miles).
///
/// Raw inputs are drawn from four bands so small distances are not drowned
/// out: 30% in 0.1–10, 30% in 10–100, 30% in 100–500, 10% in 500–1000.
/// Inputs are normalized by 1000 and outputs by `1000 * factor`, which keeps
/// both in (0, 1].
pub fn conversion_data(count: usize, factor: f64, seed: u64) -> Vec<Sample> {
    let mut random = RandomSource::new(Some(seed));

    (0..count)
        .map(|_| {
            let band = random.uniform();
            let x = if band < 0.3 {
                0.1 + random.uniform() * 9.9
            } else if band < 0.6 {
                10.0 + random.uniform() * 90.0
            } else if band < 0.9 {
                100.0 + random.uniform() * 400.0
            } else {
                500.0 + random.uniform() * 500.0
            };
            let y = x * factor;
            Sample::new(vec![x / 1000.0], vec![y / (1000.0 * factor)])
        })
        .collect()
}

/// The damped sinusoid `sin(5x) * exp(-x²)`.
pub fn sin_exp(x: f64) -> f64 {
    (5.0 * x).sin() * (-x * x).exp()
}

/// Samples of `sin_exp` on [-2, 2].
///
/// The first 60% are evenly spaced on [-1.5, 1.5]; the remaining 40% are
/// split between the tails [-2, -1.5] and [1.5, 2]. With `noise`, each target
/// gets uniform noise in ±0.005. The result is shuffled.
pub fn sin_exp_data(count: usize, noise: bool, seed: u64) -> Vec<Sample> {
    let mut random = RandomSource::new(Some(seed));
    let core = (count as f64 * 0.6) as usize;
    let tail = count - core;

    let mut data: Vec<Sample> = (0..count)
        .map(|i| {
            let x = if i < core {
                -1.5 + 3.0 * i as f64 / (core.max(2) - 1) as f64
            } else {
                let t = (i - core) as f64 / (tail.max(2) - 1) as f64;
                if t < 0.5 { -2.0 + t } else { 1.5 + (t - 0.5) }
            };
            let mut y = sin_exp(x);
            if noise {
                y += (random.uniform() - 0.5) * 0.01;
            }
            Sample::new(vec![x], vec![y])
        })
        .collect();

    random.shuffle(&mut data);
    data
}

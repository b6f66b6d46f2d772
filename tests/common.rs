#![allow(dead_code)]

use fitnet::Sample;

/// `count` evenly spaced samples of `f` on [lo, hi].
pub fn sampled(count: usize, lo: f64, hi: f64, f: impl Fn(f64) -> f64) -> Vec<Sample> {
    (0..count)
        .map(|i| lo + (hi - lo) * i as f64 / (count - 1) as f64)
        .map(|x| Sample::new(vec![x], vec![f(x)]))
        .collect()
}

/// A path under the system temp dir that is unique to this test process.
pub fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("fitnet-{}-{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

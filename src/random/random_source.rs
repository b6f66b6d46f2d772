use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Seedable source of uniform and Gaussian draws used for weight
/// initialization and per-epoch shuffling.
///
/// Gaussian values come from the Box-Muller transform. Each pair of uniform
/// draws yields two independent standard-normal values; the second one is kept
/// in `spare` and handed out on the next call. The spare belongs to this
/// instance only, so independently seeded sources never interfere.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    spare: Option<f64>,
}

impl RandomSource {
    /// `Some(seed)` gives a reproducible stream; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> RandomSource {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomSource { rng, spare: None }
    }

    /// Uniform draw in [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Standard-normal draw (mean 0, standard deviation 1).
    pub fn gaussian(&mut self) -> f64 {
        self.gaussian_with(0.0, 1.0)
    }

    /// Normal draw with the given mean and standard deviation.
    pub fn gaussian_with(&mut self, mean: f64, std_dev: f64) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare * std_dev + mean;
        }

        // 1 - u keeps the radius argument in (0, 1] so ln never sees 0.
        let u = 1.0 - self.uniform();
        let v = self.uniform();
        let magnitude = (-2.0 * u.ln()).sqrt();
        let angle = 2.0 * PI * v;

        self.spare = Some(magnitude * angle.cos());
        magnitude * angle.sin() * std_dev + mean
    }

    /// In-place Fisher-Yates shuffle driven by this source.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Root-mean-square error, the metric reported per sample and per epoch.
pub struct RmsError;

impl RmsError {
    /// Output error vector `expected - predicted`.
    pub fn errors(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        expected.iter().zip(predicted.iter())
            .map(|(y, p)| y - p)
            .collect()
    }

    /// sqrt(mean(error²)) of a single error vector.
    pub fn of(errors: &[f64]) -> f64 {
        let n = errors.len() as f64;
        (errors.iter().map(|e| e * e).sum::<f64>() / n).sqrt()
    }

    /// Combines per-sample RMS values: sqrt(Σ rms² / count).
    pub fn aggregate(sum_of_squares: f64, count: usize) -> f64 {
        (sum_of_squares / count as f64).sqrt()
    }
}

use serde::{Serialize, Deserialize};

/// Outcome of one `train_batch` run.
///
/// Built by the training loop and read-only afterwards. A run interrupted
/// before its first epoch has an empty history and no final error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    error_history: Vec<f64>,
    converged_at: Option<usize>,
}

impl TrainingReport {
    pub(crate) fn new() -> TrainingReport {
        TrainingReport::default()
    }

    pub(crate) fn record_epoch(&mut self, rms_error: f64) {
        self.error_history.push(rms_error);
    }

    pub(crate) fn mark_converged(&mut self, epoch: usize) {
        self.converged_at = Some(epoch);
    }

    /// RMS error of every completed epoch, in order.
    pub fn error_history(&self) -> &[f64] {
        &self.error_history
    }

    /// RMS error of the last completed epoch; `None` if no epoch completed.
    pub fn final_error(&self) -> Option<f64> {
        self.error_history.last().copied()
    }

    /// 1-based epoch at which the target error was reached, if it was.
    pub fn converged_at(&self) -> Option<usize> {
        self.converged_at
    }

    pub fn epochs_run(&self) -> usize {
        self.error_history.len()
    }

    pub fn initial_error(&self) -> Option<f64> {
        self.error_history.first().copied()
    }

    /// Drop in RMS error between the first and the last epoch; `0.0` if no
    /// epoch completed.
    pub fn improvement(&self) -> f64 {
        match (self.initial_error(), self.final_error()) {
            (Some(first), Some(last)) => first - last,
            _ => 0.0,
        }
    }

    /// Serializes the report to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_report() {
        let report = TrainingReport::new();
        assert_eq!(report.epochs_run(), 0);
        assert_eq!(report.initial_error(), None);
        assert_eq!(report.final_error(), None);
        assert_eq!(report.improvement(), 0.0);
        assert_eq!(report.converged_at(), None);
    }

    #[test]
    fn final_error_tracks_last_epoch() {
        let mut report = TrainingReport::new();
        report.record_epoch(0.5);
        report.record_epoch(0.2);
        report.mark_converged(2);

        assert_eq!(report.error_history(), &[0.5, 0.2]);
        assert_eq!(report.final_error(), Some(0.2));
        assert_eq!(report.converged_at(), Some(2));
        assert_abs_diff_eq!(report.improvement(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn json_keeps_error_history_exact() {
        let mut report = TrainingReport::new();
        report.record_epoch(1.2860334426243563);
        report.record_epoch(0.2191951437875188);

        let json = serde_json::to_string(&report).unwrap();
        let parsed: TrainingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.final_error().map(f64::to_bits), report.final_error().map(f64::to_bits));
    }
}

use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`      — upper bound on full passes over the training data
/// - `target_error`    — training stops after the first epoch whose RMS error
///                       is at or below this value
/// - `report_interval` — log progress every `report_interval` epochs (and on
///                       the last one); `0` disables periodic reports
/// - `progress_tx`     — optional channel sender; one `EpochStats` is sent per
///                       completed epoch.  If the receiver is dropped the loop
///                       terminates early.
/// - `stop_flag`       — optional atomic flag; when set to `true` from another
///                       thread the loop terminates at the next epoch boundary.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub target_error: f64,
    pub report_interval: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(max_epochs: usize, target_error: f64, report_interval: usize) -> Self {
        TrainConfig {
            max_epochs,
            target_error,
            report_interval,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    /// Whether the 1-based `epoch` should be logged at info level.
    pub(crate) fn should_report(&self, epoch: usize) -> bool {
        epoch == self.max_epochs
            || (self.report_interval > 0 && (epoch - 1) % self.report_interval == 0)
    }
}

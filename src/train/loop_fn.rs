use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{info, trace, warn};

use crate::data::dataset::Sample;
use crate::error::{NetworkError, Result};
use crate::loss::rms::RmsError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::training_report::TrainingReport;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` on `dataset` for up to `config.max_epochs` epochs.
///
/// Each epoch visits every sample exactly once, in an order shuffled by the
/// network's own `RandomSource`, and records the epoch RMS error
/// `sqrt(Σ sample_rms² / n)` into the returned report.
///
/// # Early termination
/// The loop breaks early if:
/// - an epoch's RMS error is at or below `config.target_error` (the epoch is
///   recorded as the convergence point),
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// The dataset is validated up front, so nothing is trained if it is empty,
/// `max_epochs` is zero, or any sample has the wrong input or output width.
pub fn train_loop(
    network: &mut Network,
    dataset: &[Sample],
    config: &TrainConfig,
) -> Result<TrainingReport> {
    if dataset.is_empty() {
        return Err(NetworkError::InvalidConfig("dataset must not be empty".to_owned()));
    }
    if config.max_epochs == 0 {
        return Err(NetworkError::InvalidConfig("max_epochs must be at least 1".to_owned()));
    }
    for sample in dataset {
        network.check_sample(&sample.input, &sample.expected)?;
    }

    let mut report = TrainingReport::new();
    let mut order: Vec<usize> = (0..dataset.len()).collect();

    for epoch in 1..=config.max_epochs {
        if stop_requested(config) {
            warn!("training stopped by request before epoch {}", epoch);
            break;
        }

        let t_start = Instant::now();
        let rms_error = run_one_epoch(network, dataset, &mut order)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        report.record_epoch(rms_error);

        if config.should_report(epoch) {
            info!("epoch {}: average error {:.6}", epoch, rms_error);
        } else {
            trace!("epoch {}: average error {:.6}", epoch, rms_error);
        }

        let converged = rms_error <= config.target_error;
        if converged {
            info!("target error {} reached at epoch {}", config.target_error, epoch);
            report.mark_converged(epoch);
        }

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.max_epochs,
                rms_error,
                elapsed_ms,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                warn!("progress receiver dropped, stopping after epoch {}", epoch);
                break;
            }
        }

        if converged {
            break;
        }
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One shuffled pass of online gradient descent. Returns the epoch RMS error.
fn run_one_epoch(network: &mut Network, dataset: &[Sample], order: &mut [usize]) -> Result<f64> {
    network.shuffle(order);

    let mut sum_of_squares = 0.0;
    for &idx in order.iter() {
        let sample = &dataset[idx];
        let sample_error = network.train_one(&sample.input, &sample.expected)?;
        sum_of_squares += sample_error * sample_error;
    }

    Ok(RmsError::aggregate(sum_of_squares, order.len()))
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};
    use crate::activation::ActivationFunction::Linear;

    fn identity_data() -> Vec<Sample> {
        (0..10)
            .map(|i| {
                let x = i as f64 / 10.0;
                Sample::new(vec![x], vec![x])
            })
            .collect()
    }

    fn linear_net(seed: u64) -> Network {
        Network::new(&[1, 1], 0.1, Some(seed), Linear, Linear).unwrap()
    }

    #[test]
    fn rejects_empty_dataset_and_zero_epochs() {
        let mut net = linear_net(0);
        let config = TrainConfig::new(10, 0.0, 0);
        assert!(matches!(train_loop(&mut net, &[], &config), Err(NetworkError::InvalidConfig(_))));

        let config = TrainConfig::new(0, 0.0, 0);
        assert!(matches!(
            train_loop(&mut net, &identity_data(), &config),
            Err(NetworkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn bad_sample_aborts_before_training() {
        let mut net = linear_net(0);
        let before = net.snapshot();
        let mut data = identity_data();
        data.push(Sample::new(vec![1.0], vec![1.0, 2.0]));

        let err = train_loop(&mut net, &data, &TrainConfig::new(5, 0.0, 0)).unwrap_err();
        assert!(matches!(err, NetworkError::DimensionMismatch { .. }));
        assert_eq!(net.snapshot(), before);
    }

    #[test]
    fn runs_full_budget_without_convergence() {
        let mut net = linear_net(1);
        let report = train_loop(&mut net, &identity_data(), &TrainConfig::new(7, 0.0, 0)).unwrap();
        assert_eq!(report.epochs_run(), 7);
        assert_eq!(report.converged_at(), None);
        assert_eq!(report.final_error(), Some(report.error_history()[6]));
    }

    #[test]
    fn stops_at_target_error() {
        let mut net = linear_net(2);
        let report = train_loop(&mut net, &identity_data(), &TrainConfig::new(50, f64::MAX, 0)).unwrap();
        assert_eq!(report.epochs_run(), 1);
        assert_eq!(report.converged_at(), Some(1));
    }

    #[test]
    fn sends_one_stat_per_epoch() {
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig::new(4, 0.0, 1).with_progress(tx);
        let mut net = linear_net(3);
        let report = train_loop(&mut net, &identity_data(), &config).unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[3].epoch, 4);
        assert_eq!(stats[3].total_epochs, 4);
        assert_eq!(Some(stats[3].rms_error), report.final_error());
    }

    #[test]
    fn dropped_receiver_stops_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = TrainConfig::new(10, 0.0, 0).with_progress(tx);
        let mut net = linear_net(4);
        let report = train_loop(&mut net, &identity_data(), &config).unwrap();
        assert_eq!(report.epochs_run(), 1);
    }

    #[test]
    fn stop_flag_prevents_further_epochs() {
        let flag = Arc::new(AtomicBool::new(true));
        let config = TrainConfig::new(10, 0.0, 0).with_stop_flag(flag);
        let mut net = linear_net(5);
        let report = train_loop(&mut net, &identity_data(), &config).unwrap();
        assert_eq!(report.epochs_run(), 0);
        assert_eq!(report.final_error(), None);
        assert_eq!(report.converged_at(), None);
    }
}

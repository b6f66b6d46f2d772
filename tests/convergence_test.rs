mod common;

use fitnet::data::{conversion_data, sin_exp, sin_exp_data};
use fitnet::ActivationFunction::{Linear, Tanh};
use fitnet::{Network, Sample};

use common::sampled;

#[test]
fn single_unit_converges_on_constant_sample() {
    let data = vec![Sample::new(vec![0.5], vec![0.5]); 50];
    let mut network = Network::new(&[1, 1], 0.5, Some(42), Linear, Linear).unwrap();

    let report = network.train_batch(&data, 50, 1e-3, 10).unwrap();

    assert!(report.epochs_run() <= 50);
    let final_error = report.final_error().unwrap();
    assert!(final_error < 1e-3, "final error was {}", final_error);
    assert!(report.converged_at().is_some());
    assert_eq!(final_error, *report.error_history().last().unwrap());
}

#[test]
fn identity_error_decreases_in_early_epochs() {
    let data = sampled(20, -1.0, 1.0, |x| x);
    let mut network = Network::new(&[1, 1], 0.1, Some(42), Linear, Linear).unwrap();

    let report = network.train_batch(&data, 10, 0.0, 0).unwrap();
    let history = report.error_history();

    assert_eq!(history.len(), 10);
    for pair in history[..6].windows(2) {
        assert!(pair[1] < pair[0], "error did not decrease: {:?}", history);
    }
}

#[test]
fn fixed_seed_training_is_reproducible() {
    let data = sin_exp_data(200, false, 3);

    let run = |seed: u64| {
        let mut network = Network::new(&[1, 6, 1], 0.05, Some(seed), Tanh, Linear).unwrap();
        let report = network.train_batch(&data, 20, 0.0, 0).unwrap();
        (report, network.snapshot())
    };

    let (first, first_weights) = run(11);
    let (second, second_weights) = run(11);
    let (other, _) = run(12);

    assert_eq!(first.error_history(), second.error_history());
    assert_eq!(first_weights, second_weights);
    assert_ne!(first.error_history(), other.error_history());
}

#[test]
fn linear_network_learns_unit_conversion() {
    let data = conversion_data(1000, 0.621371, 42);
    let mut network = Network::new(&[1, 4, 1], 0.05, Some(42), Linear, Linear).unwrap();

    let report = network.train_batch(&data, 200, 1e-4, 50).unwrap();

    let final_error = report.final_error().unwrap();
    assert!(final_error < 0.02, "final error was {}", final_error);
    let predicted = network.infer(&[0.3]).unwrap()[0];
    assert!((predicted - 0.3).abs() < 0.05, "predicted {}", predicted);
}

#[test]
fn tanh_network_improves_on_damped_sine() {
    let data = sin_exp_data(500, false, 42);
    let mut network = Network::new(&[1, 8, 1], 0.05, Some(42), Tanh, Linear).unwrap();

    let report = network.train_batch(&data, 50, 0.0, 10).unwrap();

    assert_eq!(report.epochs_run(), 50);
    assert!(report.final_error().unwrap() < report.initial_error().unwrap());
    assert!(report.improvement() > 0.0);

    let held_out = sampled(25, -1.9, 1.9, sin_exp);
    let validation = network.evaluate(&held_out).unwrap();
    assert!(validation.is_finite());
}

/// fitnet · console demo
///
/// Trains a [1, 15, 10, 1] network on two scalar functions and compares the
/// predictions on a few held-out points with the true values:
///   1. km → miles conversion (Linear hidden, Linear output)
///   2. sin(5x)·exp(-x²)      (Tanh hidden, Linear output)
///
/// Run with:
///   cargo run --release
///   cargo run --release -- km.json sin.json   # one NetworkSpec per task
///   cargo run --release -- - sin.json         # `-` keeps a task's defaults
///
/// The n-th argument overrides the n-th task only. A task without an override
/// uses its own activations and prompts for a learning rate.
///
/// Set `RUST_LOG=debug` for more training output.

use std::io::{self, BufRead, Write};
use std::process;

use log::{error, warn};

use fitnet::data::{conversion_data, sin_exp, sin_exp_data, split};
use fitnet::{ActivationFunction, Network, NetworkSpec, Sample, TrainingReport};

const KM_TO_MILES: f64 = 0.621371;
const DATASET_SIZE: usize = 10_000;
const DATA_SEED: u64 = 42;
const TRAIN_FRACTION: f64 = 0.8;
const MAX_EPOCHS: usize = 2000;
const TARGET_ERROR: f64 = 0.0003;
const REPORT_INTERVAL: usize = 100;
const DEFAULT_LEARNING_RATE: f64 = 0.15;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Task {
    KmToMiles,
    SinExp,
}

const TASKS: [Task; 2] = [Task::KmToMiles, Task::SinExp];

impl Task {
    fn name(&self) -> &'static str {
        match self {
            Task::KmToMiles => "km_to_miles",
            Task::SinExp => "sin_exp",
        }
    }

    fn data(&self) -> Vec<Sample> {
        match self {
            Task::KmToMiles => conversion_data(DATASET_SIZE, KM_TO_MILES, DATA_SEED),
            Task::SinExp => sin_exp_data(DATASET_SIZE, false, DATA_SEED),
        }
    }

    fn default_spec(&self, learning_rate: f64) -> NetworkSpec {
        let hidden_activation = match self {
            Task::KmToMiles => ActivationFunction::Linear,
            Task::SinExp => ActivationFunction::Tanh,
        };
        NetworkSpec {
            topology: vec![1, 15, 10, 1],
            learning_rate,
            seed: Some(42),
            hidden_activation,
            output_activation: ActivationFunction::Linear,
        }
    }

    fn test_inputs(&self) -> &'static [f64] {
        match self {
            Task::KmToMiles => &[0.1, 0.5, 1.0, 5.0, 10.0, 50.0, 100.0, 200.0, 500.0, 750.0, 999.0],
            Task::SinExp => &[-1.5, -0.75, -0.25, 0.1, 0.5, 1.0, 1.5, 1.9],
        }
    }

    fn normalize(&self, x: f64) -> f64 {
        match self {
            Task::KmToMiles => x / 1000.0,
            Task::SinExp => x,
        }
    }

    fn denormalize(&self, y: f64) -> f64 {
        match self {
            Task::KmToMiles => y * 1000.0 * KM_TO_MILES,
            Task::SinExp => y,
        }
    }

    fn actual(&self, x: f64) -> f64 {
        match self {
            Task::KmToMiles => x * KM_TO_MILES,
            Task::SinExp => sin_exp(x),
        }
    }
}

// ---------------------------------------------------------------------------
// Console helpers
// ---------------------------------------------------------------------------

/// Reads a learning rate from stdin; anything unparsable or non-positive
/// falls back to `DEFAULT_LEARNING_RATE`.
fn prompt_learning_rate() -> f64 {
    print!("learning rate: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let parsed = io::stdin()
        .lock()
        .read_line(&mut line)
        .ok()
        .and_then(|_| line.trim().parse::<f64>().ok())
        .filter(|lr| lr.is_finite() && *lr > 0.0);

    parsed.unwrap_or_else(|| {
        warn!("invalid learning rate {:?}, using {}", line.trim(), DEFAULT_LEARNING_RATE);
        DEFAULT_LEARNING_RATE
    })
}

fn verdict(error_percent: f64) -> &'static str {
    if error_percent < 1.0 {
        "Excellent"
    } else if error_percent < 5.0 {
        "Good"
    } else if error_percent < 10.0 {
        "Fair"
    } else {
        "Poor"
    }
}

fn print_report(report: &TrainingReport) {
    println!("Learning statistics:");
    println!("  Epochs:      {}", report.epochs_run());
    if let Some(initial) = report.initial_error() {
        println!("  Start error: {:.6}", initial);
    }
    match report.final_error() {
        Some(final_error) => println!("  Final error: {:.6}", final_error),
        None => println!("  Final error: n/a (no epoch completed)"),
    }
    println!("  Improvement: {:.6}", report.improvement());
    match report.converged_at() {
        Some(epoch) => println!("  Converged at epoch {}", epoch),
        None => println!("  Target error not reached"),
    }
}

fn print_comparison(task: Task, network: &Network) -> fitnet::Result<()> {
    println!("=== Testing ===");
    for &x in task.test_inputs() {
        let prediction = task.denormalize(network.infer(&[task.normalize(x)])?[0]);
        let actual = task.actual(x);
        let error = (prediction - actual).abs();
        let error_percent = if actual != 0.0 { error / actual.abs() * 100.0 } else { 0.0 };

        println!(
            "{:>8.2} -> {:>12.6} (wanted: {:>12.6}, error: {:>7.2}%) {}",
            x, prediction, actual, error_percent, verdict(error_percent)
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn run_task(task: Task, spec_override: Option<&NetworkSpec>) -> fitnet::Result<()> {
    println!();
    println!("##### {} #####", task.name());

    let spec = match spec_override {
        Some(spec) => spec.clone(),
        None => task.default_spec(prompt_learning_rate()),
    };
    let mut network = spec.build()?;

    let data = task.data();
    let (training, validation) = split(&data, TRAIN_FRACTION);
    println!("training samples: {}, validation samples: {}", training.len(), validation.len());
    println!("Hidden activation: {}", spec.hidden_activation);
    println!("Output activation: {}", spec.output_activation);
    println!("Learning rate:     {}", spec.learning_rate);

    println!("Start weights:");
    print!("{}", network.snapshot());

    println!("Learning on {} samples...", training.len());
    let report = network.train_batch(&training, MAX_EPOCHS, TARGET_ERROR, REPORT_INTERVAL)?;

    println!("Final weights:");
    print!("{}", network.snapshot());

    println!("Validation error: {:.6}", network.evaluate(&validation)?);
    print_comparison(task, &network)?;
    print_report(&report);
    Ok(())
}

/// Pairs every task with the spec path given for it, by position. `-` or a
/// missing argument leaves that task on its defaults.
fn override_paths(args: &[String]) -> Vec<(Task, Option<&str>)> {
    TASKS.iter()
        .enumerate()
        .map(|(i, &task)| {
            let path = args.get(i).map(String::as_str).filter(|path| *path != "-");
            (task, path)
        })
        .collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > TASKS.len() {
        warn!("ignoring {} extra argument(s); expected at most one spec per task", args.len() - TASKS.len());
    }

    for (task, path) in override_paths(&args) {
        let spec_override = path.map(|path| {
            NetworkSpec::load_json(path).unwrap_or_else(|e| {
                error!("cannot load network spec '{}': {}", path, e);
                process::exit(1);
            })
        });
        if let Err(e) = run_task(task, spec_override.as_ref()) {
            error!("{} failed: {}", task.name(), e);
            process::exit(1);
        }
    }
}

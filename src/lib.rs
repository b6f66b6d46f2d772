//! A from-scratch multilayer perceptron for fitting scalar functions.
//!
//! Networks are fully connected, trained one sample at a time with plain
//! backpropagation, and report per-epoch RMS error with early stopping.
//!
//! ```no_run
//! use fitnet::{ActivationFunction, Network, Sample};
//!
//! # fn main() -> fitnet::Result<()> {
//! let data: Vec<Sample> = (0..100)
//!     .map(|i| {
//!         let x = i as f64 / 100.0;
//!         Sample::new(vec![x], vec![2.0 * x])
//!     })
//!     .collect();
//!
//! let mut network = Network::new(
//!     &[1, 8, 1], 0.05, Some(42),
//!     ActivationFunction::Tanh, ActivationFunction::Linear,
//! )?;
//! let report = network.train_batch(&data, 500, 1e-3, 100)?;
//! println!("final error {:?}", report.final_error());
//! println!("{:?}", network.infer(&[0.25])?);
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod random;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use data::dataset::Sample;
pub use error::{NetworkError, Result};
pub use layers::dense::Layer;
pub use layers::unit::Unit;
pub use network::network::Network;
pub use network::snapshot::NetworkSnapshot;
pub use network::spec::NetworkSpec;
pub use optim::sgd::Sgd;
pub use random::random_source::RandomSource;
pub use train::train_config::TrainConfig;
pub use train::training_report::TrainingReport;

use log::debug;

use crate::activation::activation::ActivationFunction;
use crate::data::dataset::Sample;
use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;
use crate::layers::unit::Unit;
use crate::loss::rms::RmsError;
use crate::network::snapshot::{LayerSnapshot, NetworkSnapshot, UnitSnapshot};
use crate::optim::sgd::Sgd;
use crate::random::RandomSource;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;
use crate::train::training_report::TrainingReport;

/// A fully connected feed-forward network trained one sample at a time.
///
/// `layers[0]` is the first layer with units; the raw input is not stored as
/// a layer. `topology` keeps the full shape including the input width, so
/// `layers[i].size() == topology[i + 1]`.
///
/// Training mutates per-unit forward caches, so a `Network` must not be
/// trained from several threads at once. `infer` takes `&self` and is safe to
/// share.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    topology: Vec<usize>,
    optimizer: Sgd,
    random: RandomSource,
}

impl Network {
    /// Builds a network with Gaussian fan-in-scaled weights and zero biases.
    ///
    /// The last layer uses `output`; every other layer uses `hidden`.
    pub fn new(
        topology: &[usize],
        learning_rate: f64,
        seed: Option<u64>,
        hidden: ActivationFunction,
        output: ActivationFunction,
    ) -> Result<Network> {
        validate_topology(topology)?;

        let mut random = RandomSource::new(seed);
        let last = topology.len() - 1;
        let layers = (1..topology.len())
            .map(|i| {
                let activation = if i == last { output } else { hidden };
                Layer::new(topology[i], topology[i - 1], activation, &mut random)
            })
            .collect();

        debug!(
            "built network {:?} (hidden {}, output {}, lr {}, seed {:?})",
            topology, hidden, output, learning_rate, seed
        );

        Ok(Network {
            layers,
            topology: topology.to_vec(),
            optimizer: Sgd::new(learning_rate),
            random,
        })
    }

    /// Rebuilds a network from a snapshot's weights, biases and activations.
    pub fn from_snapshot(
        snapshot: &NetworkSnapshot,
        learning_rate: f64,
        seed: Option<u64>,
    ) -> Result<Network> {
        let topology = &snapshot.topology;
        validate_topology(topology)?;
        if snapshot.layers.len() != topology.len() - 1 {
            return Err(NetworkError::mismatch(
                "snapshot layer count",
                topology.len() - 1,
                snapshot.layers.len(),
            ));
        }

        let mut layers = Vec::with_capacity(snapshot.layers.len());
        for (i, layer) in snapshot.layers.iter().enumerate() {
            let input_size = topology[i];
            if layer.units.len() != topology[i + 1] {
                return Err(NetworkError::mismatch("snapshot layer", topology[i + 1], layer.units.len()));
            }
            let mut units = Vec::with_capacity(layer.units.len());
            for unit in &layer.units {
                if unit.weights.len() != input_size {
                    return Err(NetworkError::mismatch("snapshot unit weights", input_size, unit.weights.len()));
                }
                units.push(Unit::with_weights(unit.weights.clone(), unit.bias, layer.activation));
            }
            layers.push(Layer::from_units(units, input_size, layer.activation));
        }

        Ok(Network {
            layers,
            topology: topology.clone(),
            optimizer: Sgd::new(learning_rate),
            random: RandomSource::new(seed),
        })
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.topology[0]
    }

    pub fn output_size(&self) -> usize {
        self.topology[self.topology.len() - 1]
    }

    /// Pure forward pass. Leaves weights and unit caches untouched.
    pub fn infer(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.check_input(inputs)?;
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.evaluate(&current)?;
        }
        Ok(current)
    }

    /// Runs one sample through forward and backward passes and updates every
    /// unit. Returns the sample's RMS output error (measured before the update).
    ///
    /// Error signals for all layers are computed from the pre-update weights
    /// before any unit is changed.
    pub fn train_one(&mut self, inputs: &[f64], expected: &[f64]) -> Result<f64> {
        self.check_sample(inputs, expected)?;

        // outputs[i] is the input of layers[i]; the last entry is the prediction.
        let mut outputs = Vec::with_capacity(self.layers.len() + 1);
        outputs.push(inputs.to_vec());
        for layer in &mut self.layers {
            let next = layer.feed_from(&outputs[outputs.len() - 1])?;
            outputs.push(next);
        }

        let errors = RmsError::errors(&outputs[self.layers.len()], expected);
        let sample_error = RmsError::of(&errors);

        let last = self.layers.len() - 1;
        let mut signals = vec![Vec::new(); self.layers.len()];
        signals[last] = self.layers[last].error_signals(&errors);
        for i in (0..last).rev() {
            let raw = self.layers[i + 1].backpropagate(&signals[i + 1]);
            signals[i] = self.layers[i].error_signals(&raw);
        }

        let optimizer = self.optimizer;
        for (i, layer) in self.layers.iter_mut().enumerate() {
            for (unit, signal) in layer.units.iter_mut().zip(&signals[i]) {
                optimizer.step(unit, *signal, &outputs[i]);
            }
        }

        Ok(sample_error)
    }

    /// Trains on `dataset` for up to `max_epochs` shuffled epochs, stopping
    /// once an epoch's RMS error is at or below `target_error`. Progress is
    /// logged every `report_interval` epochs.
    pub fn train_batch(
        &mut self,
        dataset: &[Sample],
        max_epochs: usize,
        target_error: f64,
        report_interval: usize,
    ) -> Result<TrainingReport> {
        let config = TrainConfig::new(max_epochs, target_error, report_interval);
        self.train_with(dataset, &config)
    }

    /// `train_batch` with a full `TrainConfig` (progress channel, stop flag).
    pub fn train_with(&mut self, dataset: &[Sample], config: &TrainConfig) -> Result<TrainingReport> {
        train_loop(self, dataset, config)
    }

    /// RMS error over `dataset` without training.
    pub fn evaluate(&self, dataset: &[Sample]) -> Result<f64> {
        if dataset.is_empty() {
            return Err(NetworkError::InvalidConfig("dataset must not be empty".to_owned()));
        }
        let mut sum_of_squares = 0.0;
        for sample in dataset {
            self.check_sample(&sample.input, &sample.expected)?;
            let predicted = self.infer(&sample.input)?;
            let rms = RmsError::of(&RmsError::errors(&predicted, &sample.expected));
            sum_of_squares += rms * rms;
        }
        Ok(RmsError::aggregate(sum_of_squares, dataset.len()))
    }

    /// Read-only copy of every unit's weights and bias, grouped by layer.
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            topology: self.topology.clone(),
            layers: self.layers.iter()
                .map(|layer| LayerSnapshot {
                    activation: layer.activation(),
                    units: layer.units().iter()
                        .map(|unit| UnitSnapshot {
                            weights: unit.weights().to_vec(),
                            bias: unit.bias(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub(crate) fn shuffle<T>(&mut self, items: &mut [T]) {
        self.random.shuffle(items);
    }

    pub(crate) fn check_sample(&self, inputs: &[f64], expected: &[f64]) -> Result<()> {
        self.check_input(inputs)?;
        if expected.len() != self.output_size() {
            return Err(NetworkError::mismatch("expected output", self.output_size(), expected.len()));
        }
        Ok(())
    }

    fn check_input(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_size() {
            return Err(NetworkError::mismatch("input", self.input_size(), inputs.len()));
        }
        Ok(())
    }
}

fn validate_topology(topology: &[usize]) -> Result<()> {
    if topology.len() < 2 {
        return Err(NetworkError::InvalidTopology(format!(
            "need at least 2 layers, got {}",
            topology.len()
        )));
    }
    if let Some(i) = topology.iter().position(|&width| width == 0) {
        return Err(NetworkError::InvalidTopology(format!("layer {} has zero width", i)));
    }
    Ok(())
}

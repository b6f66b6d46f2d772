use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::unit::Unit;
use crate::random::RandomSource;

/// A fully connected layer: `size` units sharing one activation, each
/// reading the whole output of the previous layer.
#[derive(Debug, Clone)]
pub struct Layer {
    pub(crate) units: Vec<Unit>,
    input_size: usize,
    activator: ActivationFunction,
}

impl Layer {
    pub fn new(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        random: &mut RandomSource,
    ) -> Layer {
        let units = (0..size)
            .map(|_| Unit::new(input_size, random, activation))
            .collect();
        Layer { units, input_size, activator: activation }
    }

    /// Builds a layer from explicit units. Every unit must have `input_size`
    /// weights and use `activation`.
    pub(crate) fn from_units(units: Vec<Unit>, input_size: usize, activation: ActivationFunction) -> Layer {
        Layer { units, input_size, activator: activation }
    }

    pub fn size(&self) -> usize {
        self.units.len()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activator
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Forward pass that fills every unit's cache.
    pub fn feed_from(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;
        self.units.iter_mut().map(|unit| unit.forward(input)).collect()
    }

    /// Forward pass with no side effects.
    pub fn evaluate(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;
        self.units.iter()
            .map(|unit| unit.evaluate(input).map(|(_, output)| output))
            .collect()
    }

    /// Turns raw errors (one per unit) into error signals by multiplying with
    /// each unit's activation derivative at its cached pre-activation.
    pub fn error_signals(&self, raw_errors: &[f64]) -> Vec<f64> {
        debug_assert_eq!(raw_errors.len(), self.units.len());
        self.units.iter()
            .zip(raw_errors)
            .map(|(unit, error)| error * unit.activation_derivative())
            .collect()
    }

    /// Sends this layer's error signals back through its weights, giving the
    /// raw error of each unit in the previous layer:
    /// `raw[i] = Σ_j weights[j][i] * signals[j]`.
    pub fn backpropagate(&self, signals: &[f64]) -> Vec<f64> {
        debug_assert_eq!(signals.len(), self.units.len());
        let mut raw = vec![0.0; self.input_size];
        for (unit, signal) in self.units.iter().zip(signals) {
            for (acc, w) in raw.iter_mut().zip(unit.weights()) {
                *acc += w * signal;
            }
        }
        raw
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size {
            return Err(NetworkError::mismatch("layer input", self.input_size, input.len()));
        }
        Ok(())
    }
}

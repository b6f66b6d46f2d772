use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::random::RandomSource;

/// A single computational node: incoming weights, a bias and an activation.
///
/// `last_weighted_input` and `last_output` are scratch values written by
/// `forward` and read by the backward pass for the same sample.
#[derive(Debug, Clone)]
pub struct Unit {
    pub(crate) weights: Vec<f64>,
    pub(crate) bias: f64,
    activation: ActivationFunction,
    last_weighted_input: f64,
    last_output: f64,
}

impl Unit {
    /// Gaussian weights scaled by the activation's fan-in factor, zero bias.
    pub fn new(input_count: usize, random: &mut RandomSource, activation: ActivationFunction) -> Unit {
        let scale = activation.init_scale(input_count);
        let weights = (0..input_count)
            .map(|_| random.gaussian() * scale)
            .collect();
        Unit::with_weights(weights, 0.0, activation)
    }

    pub fn with_weights(weights: Vec<f64>, bias: f64, activation: ActivationFunction) -> Unit {
        Unit {
            weights,
            bias,
            activation,
            last_weighted_input: 0.0,
            last_output: 0.0,
        }
    }

    /// Computes `(z, activation(z))` without touching the caches.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<(f64, f64)> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::mismatch("unit input", self.weights.len(), inputs.len()));
        }
        let z = inputs.iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum::<f64>() + self.bias;
        Ok((z, self.activation.function(z)))
    }

    /// Like `evaluate`, but caches `z` and the output for the backward pass.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<f64> {
        let (z, output) = self.evaluate(inputs)?;
        self.last_weighted_input = z;
        self.last_output = output;
        Ok(output)
    }

    /// Derivative of the activation at the cached pre-activation value.
    pub fn activation_derivative(&self) -> f64 {
        self.activation.derivative(self.last_weighted_input)
    }

    /// Adds the deltas to the weights and bias in place.
    pub fn update(&mut self, weight_deltas: &[f64], bias_delta: f64) {
        debug_assert_eq!(weight_deltas.len(), self.weights.len());
        for (w, delta) in self.weights.iter_mut().zip(weight_deltas) {
            *w += delta;
        }
        self.bias += bias_delta;
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn last_weighted_input(&self) -> f64 {
        self.last_weighted_input
    }

    pub fn last_output(&self) -> f64 {
        self.last_output
    }
}

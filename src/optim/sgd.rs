use crate::layers::unit::Unit;

/// Plain online gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Weight deltas `lr * signal * input[i]` and bias delta `lr * signal`.
    pub fn deltas(&self, error_signal: f64, inputs: &[f64]) -> (Vec<f64>, f64) {
        let scaled = self.learning_rate * error_signal;
        let weight_deltas = inputs.iter().map(|x| scaled * x).collect();
        (weight_deltas, scaled)
    }

    /// Applies one update to a unit given its error signal and the input it saw.
    pub fn step(&self, unit: &mut Unit, error_signal: f64, inputs: &[f64]) {
        let (weight_deltas, bias_delta) = self.deltas(error_signal, inputs);
        unit.update(&weight_deltas, bias_delta);
    }
}

use serde::{Serialize, Deserialize};

/// Arguments beyond this magnitude saturate Sigmoid and Tanh to their asymptotes.
pub const SATURATION_LIMIT: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    #[serde(alias = "Identity")]
    Linear,
    ReLU,
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation. Sigmoid and Tanh are clipped outside
    /// `±SATURATION_LIMIT` and never return NaN or infinity for finite input.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Sigmoid => sigmoid(x),
            ActivationFunction::Tanh => tanh(x),
        }
    }

    /// Element-wise derivative, evaluated at the pre-activation `z`.
    ///
    /// Sigmoid and Tanh recompute the clipped value from `z` rather than
    /// reusing a cached output, so forward and backward agree under clipping.
    /// ReLU treats `z == 0` as inactive.
    pub fn derivative(&self, z: f64) -> f64 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::ReLU => if z > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid => {
                let s = sigmoid(z);
                s * (1.0 - s)
            }
            ActivationFunction::Tanh => {
                let t = tanh(z);
                1.0 - t * t
            }
        }
    }

    /// Fan-in scale for Gaussian weight initialization: `sqrt(2 / n)` for
    /// ReLU, `sqrt(2 / (n + 1))` for the others.
    pub fn init_scale(&self, input_count: usize) -> f64 {
        match self {
            ActivationFunction::ReLU => (2.0 / input_count as f64).sqrt(),
            _ => (2.0 / (input_count as f64 + 1.0)).sqrt(),
        }
    }
}

impl std::fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

fn sigmoid(x: f64) -> f64 {
    if x > SATURATION_LIMIT {
        return 1.0;
    }
    if x < -SATURATION_LIMIT {
        return 0.0;
    }
    let exp = (-x).exp();
    if !exp.is_finite() {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }
    1.0 / (1.0 + exp)
}

fn tanh(x: f64) -> f64 {
    if x > SATURATION_LIMIT {
        1.0
    } else if x < -SATURATION_LIMIT {
        -1.0
    } else {
        x.tanh()
    }
}

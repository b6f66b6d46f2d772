use std::fmt;

use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;

/// Weights and bias of one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// All units of one layer plus their shared activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    pub activation: ActivationFunction,
    pub units: Vec<UnitSnapshot>,
}

/// A detached copy of a network's trainable state, for logging, debugging
/// and persistence. `layers[i]` corresponds to `topology[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub topology: Vec<usize>,
    pub layers: Vec<LayerSnapshot>,
}

impl NetworkSnapshot {
    /// Serializes the snapshot to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a snapshot from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSnapshot> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl fmt::Display for NetworkSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(f, "Layer {}:", i + 1)?;
            for (j, unit) in layer.units.iter().enumerate() {
                let weights: Vec<String> = unit.weights.iter().map(|w| format!("{:.4}", w)).collect();
                writeln!(
                    f,
                    "  Unit {}: Weights: [{}], Bias: {:.6}, Activation: {}",
                    j + 1,
                    weights.join(", "),
                    unit.bias,
                    layer.activation
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_unit() {
        let snapshot = NetworkSnapshot {
            topology: vec![2, 1],
            layers: vec![LayerSnapshot {
                activation: ActivationFunction::Tanh,
                units: vec![UnitSnapshot { weights: vec![0.5, -0.25], bias: 0.1 }],
            }],
        };
        assert_eq!(
            snapshot.to_string(),
            "Layer 1:\n  Unit 1: Weights: [0.5000, -0.2500], Bias: 0.100000, Activation: Tanh\n"
        );
    }

    #[test]
    fn json_restores_weights_bit_for_bit() {
        let snapshot = NetworkSnapshot {
            topology: vec![2, 1],
            layers: vec![LayerSnapshot {
                activation: ActivationFunction::Linear,
                units: vec![UnitSnapshot {
                    weights: vec![-0.2191951437875188, 1.2860334426243563],
                    bias: 0.1 + 0.2,
                }],
            }],
        };
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let parsed: NetworkSnapshot = serde_json::from_str(&json).unwrap();

        let bits = |s: &NetworkSnapshot| -> Vec<u64> {
            let unit = &s.layers[0].units[0];
            unit.weights.iter().chain([&unit.bias]).map(|w| w.to_bits()).collect()
        };
        assert_eq!(bits(&parsed), bits(&snapshot));
    }
}

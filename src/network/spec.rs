use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;

fn default_learning_rate() -> f64 {
    0.15
}

/// A fully serializable description of a network: its shape, activations,
/// learning rate and seed.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// trained weights, so a run can be reproduced from a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Layer widths, input first and output last. At least two entries.
    pub topology: Vec<usize>,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    pub hidden_activation: ActivationFunction,
    pub output_activation: ActivationFunction,
}

impl NetworkSpec {
    /// Builds a freshly initialized network from this spec.
    pub fn build(&self) -> Result<Network> {
        Network::new(
            &self.topology,
            self.learning_rate,
            self.seed,
            self.hidden_activation,
            self.output_activation,
        )
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn defaults_fill_missing_fields() {
        let json = r#"{
            "topology": [1, 8, 1],
            "hidden_activation": "Tanh",
            "output_activation": "Identity"
        }"#;
        let spec: NetworkSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.learning_rate, 0.15);
        assert_eq!(spec.seed, None);
        assert_eq!(spec.output_activation, ActivationFunction::Linear);
    }

    #[test]
    fn build_uses_every_field() {
        let spec = NetworkSpec {
            topology: vec![2, 3, 1],
            learning_rate: 0.05,
            seed: Some(4),
            hidden_activation: ActivationFunction::ReLU,
            output_activation: ActivationFunction::Sigmoid,
        };
        let net = spec.build().unwrap();
        assert_eq!(net.topology(), &[2, 3, 1]);
        assert_eq!(net.learning_rate(), 0.05);
        assert_eq!(net.layers()[1].activation(), ActivationFunction::Sigmoid);

        let same = spec.build().unwrap();
        assert_eq!(net.snapshot(), same.snapshot());
    }

    #[test]
    fn build_reports_bad_topology() {
        let spec = NetworkSpec {
            topology: vec![4],
            learning_rate: 0.1,
            seed: None,
            hidden_activation: ActivationFunction::Tanh,
            output_activation: ActivationFunction::Linear,
        };
        assert!(matches!(spec.build(), Err(NetworkError::InvalidTopology(_))));
    }
}

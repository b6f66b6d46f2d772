use serde::{Serialize, Deserialize};

/// One training pair: an input vector and the output the network should produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub expected: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, expected: Vec<f64>) -> Sample {
        Sample { input, expected }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Sample {
    fn from((input, expected): (Vec<f64>, Vec<f64>)) -> Sample {
        Sample { input, expected }
    }
}

/// Splits `data` at `fraction` of its length into (training, validation).
/// `fraction` is clamped to [0, 1].
pub fn split(data: &[Sample], fraction: f64) -> (Vec<Sample>, Vec<Sample>) {
    let fraction = fraction.clamp(0.0, 1.0);
    let at = (data.len() as f64 * fraction) as usize;
    (data[..at].to_vec(), data[at..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_order_and_sizes() {
        let data: Vec<Sample> = (0..10)
            .map(|i| Sample::new(vec![i as f64], vec![0.0]))
            .collect();
        let (train, valid) = split(&data, 0.8);
        assert_eq!(train.len(), 8);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].input, vec![8.0]);
    }

    #[test]
    fn split_clamps_fraction() {
        let data = vec![Sample::from((vec![1.0], vec![2.0]))];
        let (train, valid) = split(&data, 3.0);
        assert_eq!((train.len(), valid.len()), (1, 0));
    }
}

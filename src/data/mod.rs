pub mod dataset;
pub mod generators;

pub use dataset::{split, Sample};
pub use generators::{conversion_data, sin_exp, sin_exp_data};

pub mod rms;

pub use rms::RmsError;

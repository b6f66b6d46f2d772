pub mod random_source;

pub use random_source::RandomSource;

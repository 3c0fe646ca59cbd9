mod normalizer;

pub use normalizer::*;

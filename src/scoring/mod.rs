pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::*;
pub use factors::{RawRatios, Tier};
pub use engine::{compute, ComponentScores, HealthReport};
pub use validation::validate_weights;

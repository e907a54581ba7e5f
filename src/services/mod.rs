pub mod random;
pub mod recommendations;

pub use random::{RandomSource, StdRandom};
pub use recommendations::{RecommendationService, REMOVAL_THRESHOLD};

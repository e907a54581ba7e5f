pub mod recommendation;
pub mod score;

pub use recommendation::{NewRecommendation, Recommendation};
pub use score::{ScoreComparison, ScoreDirection, ScoreFilter};

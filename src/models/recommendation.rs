use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{AppError, AppResult};

/// Accepted video link shapes (youtube.com, youtu.be, youtube.be)
const YOUTUBE_LINK_PATTERN: &str = r"^(https?://)?(www\.youtube\.com|youtu\.?be)/.+$";

fn youtube_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(YOUTUBE_LINK_PATTERN).expect("valid youtube link pattern"))
}

/// A stored recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Store-assigned identifier
    pub id: i32,
    /// Unique display name
    pub name: String,
    /// Link to the recommended video
    pub youtube_link: String,
    /// Net votes
    pub score: i32,
}

/// Input for creating a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub name: String,
    pub youtube_link: String,
}

impl NewRecommendation {
    pub fn new(name: impl Into<String>, youtube_link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            youtube_link: youtube_link.into(),
        }
    }

    /// Checks the input before it reaches the engine
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("name must not be empty".to_string()));
        }

        if !youtube_link_regex().is_match(&self.youtube_link) {
            return Err(AppError::InvalidInput(
                "youtubeLink must be a YouTube link".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_youtube_links() {
        let links = [
            "https://www.youtube.com/watch?v=g3drz5LNYrU",
            "http://www.youtube.com/watch?v=esofirhSD-o",
            "www.youtube.com/watch?v=CsHZohS2gPQ",
            "https://youtu.be/EjL1oMvO22U",
        ];

        for link in links {
            assert!(
                NewRecommendation::new("Falamansa - Xote dos Milagres", link)
                    .validate()
                    .is_ok(),
                "{} should be accepted",
                link
            );
        }
    }

    #[test]
    fn test_rejects_other_links() {
        let input = NewRecommendation::new(
            "This should fail",
            "https://open.spotify.com/track/3NMORNJPqARzfspojSKfRJ",
        );

        assert!(matches!(input.validate(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_blank_name() {
        let input = NewRecommendation::new("   ", "https://www.youtube.com/watch?v=zhIScvlFn2w");

        assert!(matches!(input.validate(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let recommendation = Recommendation {
            id: 1,
            name: "Chitãozinho E Xororó".to_string(),
            youtube_link: "https://www.youtube.com/watch?v=chwyjJbcs1Y".to_string(),
            score: 245,
        };

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["youtubeLink"], "https://www.youtube.com/watch?v=chwyjJbcs1Y");
        assert_eq!(json["score"], 245);
    }
}

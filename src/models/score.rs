/// How a filter compares a record's score against its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreComparison {
    /// `score > threshold`
    GreaterThan,
    /// `score <= threshold`
    LessOrEqual,
}

impl ScoreComparison {
    pub fn sql_operator(self) -> &'static str {
        match self {
            ScoreComparison::GreaterThan => ">",
            ScoreComparison::LessOrEqual => "<=",
        }
    }
}

/// Restricts a listing to records on one side of a score threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreFilter {
    pub score: i32,
    pub comparison: ScoreComparison,
}

impl ScoreFilter {
    pub fn greater_than(score: i32) -> Self {
        Self {
            score,
            comparison: ScoreComparison::GreaterThan,
        }
    }

    pub fn less_or_equal(score: i32) -> Self {
        Self {
            score,
            comparison: ScoreComparison::LessOrEqual,
        }
    }

    /// The complementary filter over the same threshold
    pub fn opposite(self) -> Self {
        let comparison = match self.comparison {
            ScoreComparison::GreaterThan => ScoreComparison::LessOrEqual,
            ScoreComparison::LessOrEqual => ScoreComparison::GreaterThan,
        };
        Self { comparison, ..self }
    }

    pub fn matches(&self, score: i32) -> bool {
        match self.comparison {
            ScoreComparison::GreaterThan => score > self.score,
            ScoreComparison::LessOrEqual => score <= self.score,
        }
    }
}

/// Direction of a single vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    Increment,
    Decrement,
}

impl ScoreDirection {
    pub fn delta(self) -> i32 {
        match self {
            ScoreDirection::Increment => 1,
            ScoreDirection::Decrement => -1,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Scores keyed by category. Integer values so out-of-range input stays
/// representable until validation.
pub type ScoreMap = BTreeMap<Category, i32>;

/// Lowest accepted score
pub const MIN_SCORE: i32 = 1;

/// Highest accepted score
pub const MAX_SCORE: i32 = 5;

/// Evaluation dimension. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Attendance,
    WorkQuality,
    Innovation,
    Communication,
    SkillDevelopment,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 5] = [
        Category::Attendance,
        Category::WorkQuality,
        Category::Innovation,
        Category::Communication,
        Category::SkillDevelopment,
    ];

    /// Identifier used as the key in persisted score maps
    pub fn id(&self) -> &'static str {
        match self {
            Category::Attendance => "Attendance",
            Category::WorkQuality => "WorkQuality",
            Category::Innovation => "Innovation",
            Category::Communication => "Communication",
            Category::SkillDevelopment => "SkillDevelopment",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Attendance => "Attendance",
            Category::WorkQuality => "Work Quality",
            Category::Innovation => "Innovation",
            Category::Communication => "Communication",
            Category::SkillDevelopment => "Skill Development",
        }
    }

    /// Parse from an identifier or label, ignoring case, spaces, `-` and `_`
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|c| c.id().to_lowercase() == normalized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown evaluation category '{}'", s))
    }
}

/// Word description for a score on the 1-5 scale
pub fn score_label(score: i32) -> &'static str {
    match score {
        1 => "Poor",
        2 => "Below Average",
        3 => "Average",
        4 => "Good",
        5 => "Excellent",
        _ => "Invalid",
    }
}

/// True when every category has a score
pub fn is_complete(scores: &ScoreMap) -> bool {
    Category::ALL.iter().all(|c| scores.contains_key(c))
}

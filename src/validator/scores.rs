//! Score submission validation
//!
//! Walks the closed category set rather than the submitted keys, so a
//! submission is accepted only when every category carries a score in
//! `MIN_SCORE..=MAX_SCORE`.

use crate::error::ScoreError;
use crate::models::{Category, ScoreMap, MAX_SCORE, MIN_SCORE};

/// Validate a score submission.
///
/// Reports the first problem in category declaration order.
pub fn validate(scores: &ScoreMap) -> Result<(), ScoreError> {
    for category in Category::ALL {
        let Some(&score) = scores.get(&category) else {
            return Err(ScoreError::MissingCategory(category));
        };

        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ScoreError::OutOfRange { category, score });
        }
    }

    Ok(())
}

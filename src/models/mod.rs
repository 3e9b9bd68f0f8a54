pub mod category;
pub mod employee;
pub mod evaluation;

pub use category::{score_label, Category, ScoreMap, MAX_SCORE, MIN_SCORE};
pub use employee::Employee;
pub use evaluation::{Evaluation, EvaluationKey, EvaluationStage};

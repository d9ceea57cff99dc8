pub mod engine;
mod guidance;
mod results;

pub use engine::compute_results;
pub use results::{AssessmentResults, Recommendation, WiscarScores};

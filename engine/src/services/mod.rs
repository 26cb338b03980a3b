//! Engine services
//!
//! Services coordinate the reading store, the analyzers and the
//! reference data into one insight run.

pub mod insights;
pub mod ranker;
pub mod resolver;
pub mod wellness;

pub use insights::InsightEngine;
pub use ranker::select;
pub use resolver::VitalResolver;
pub use wellness::wellness_score;

//! Health Insights Shared Library
//!
//! This crate contains the data model, reference tables and utilities
//! shared by the insight engine and the WASM bindings.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod templates;
pub mod thresholds;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use templates::{CategoryTemplate, InsightTemplates, TemplateEntry};
pub use thresholds::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;

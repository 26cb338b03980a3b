//! Reference data handed to the engine at construction
//!
//! Threshold tables and templates are loaded once and shared read-only by
//! every engine run.

use crate::error::EngineResult;
use health_insights_shared::{InsightTemplates, ThresholdTables};

/// Threshold tables plus insight templates
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    thresholds: ThresholdTables,
    templates: InsightTemplates,
}

impl ReferenceData {
    /// Build reference data, rejecting inconsistent thresholds
    pub fn new(thresholds: ThresholdTables, templates: InsightTemplates) -> EngineResult<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            templates,
        })
    }

    /// The compiled-in tables and templates
    pub fn builtin() -> Self {
        Self {
            thresholds: ThresholdTables::default(),
            templates: InsightTemplates::builtin().clone(),
        }
    }

    pub fn thresholds(&self) -> &ThresholdTables {
        &self.thresholds
    }

    pub fn templates(&self) -> &InsightTemplates {
        &self.templates
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Category analyzers
//!
//! Each analyzer maps a resolved snapshot, plus optional profile and
//! symptom context, to at most one insight. An analyzer returns `None`
//! when any of its required metrics is absent; no insight is better than
//! a wrong one.

pub mod activity;
pub mod cardiovascular;
pub mod glucose;
pub mod hydration;
pub mod rules;
pub mod sleep;
pub mod stress;

pub use activity::ActivityAnalyzer;
pub use cardiovascular::CardiovascularAnalyzer;
pub use glucose::GlucoseAnalyzer;
pub use hydration::HydrationAnalyzer;
pub use rules::{RuleCascade, TierOutcome};
pub use sleep::SleepAnalyzer;
pub use stress::StressAnalyzer;

use health_insights_shared::{
    CategoryAssessment, CategoryId, HealthInsight, InsightTemplates, MetricType, TemplateEntry,
    ThresholdTables, Tier, UserProfile, VitalSnapshot,
};
use tracing::warn;

/// Everything an analyzer may read during one run
#[derive(Debug, Clone)]
pub struct AnalysisContext<'a> {
    pub snapshot: &'a VitalSnapshot,
    pub profile: Option<&'a UserProfile>,
    pub symptoms: Vec<&'a str>,
    pub thresholds: &'a ThresholdTables,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(snapshot: &'a VitalSnapshot, thresholds: &'a ThresholdTables) -> Self {
        Self {
            snapshot,
            profile: None,
            symptoms: Vec::new(),
            thresholds,
        }
    }

    pub fn with_profile(mut self, profile: Option<&'a UserProfile>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_symptoms(mut self, symptoms: impl IntoIterator<Item = &'a str>) -> Self {
        self.symptoms.extend(symptoms);
        self
    }

    pub fn metric(&self, metric: MetricType) -> Option<f64> {
        self.snapshot.get(metric)
    }
}

/// An analyzer's graded result, before templating
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub tier: Tier,
    pub outcome: TierOutcome,
    pub description: String,
}

/// A classifier for one health category
pub trait CategoryAnalyzer: Send + Sync {
    fn category(&self) -> CategoryId;

    /// Grade the category; `None` when required metrics are missing
    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment>;

    /// Profile-dependent actions appended after the template's actions
    fn personalize(&self, _ctx: &AnalysisContext<'_>, _tier: Tier) -> Vec<String> {
        Vec::new()
    }

    /// Grade and compose the insight in one step
    fn analyze(
        &self,
        ctx: &AnalysisContext<'_>,
        templates: &InsightTemplates,
    ) -> Option<(CategoryAssessment, HealthInsight)> {
        let assessment = self.assess(ctx)?;
        let extra = self.personalize(ctx, assessment.tier);
        Some(compose_insight(self.category(), assessment, extra, templates))
    }
}

/// The six analyzers in emission order
pub fn default_analyzers() -> Vec<Box<dyn CategoryAnalyzer>> {
    vec![
        Box::new(CardiovascularAnalyzer),
        Box::new(SleepAnalyzer),
        Box::new(StressAnalyzer),
        Box::new(HydrationAnalyzer),
        Box::new(GlucoseAnalyzer),
        Box::new(ActivityAnalyzer),
    ]
}

/// Build the insight for an assessment
///
/// A missing template entry yields the generic recommendation with no
/// actions; personalised actions are dropped along with the template's.
pub fn compose_insight(
    category: CategoryId,
    assessment: Assessment,
    extra_actions: Vec<String>,
    templates: &InsightTemplates,
) -> (CategoryAssessment, HealthInsight) {
    let Assessment {
        tier,
        outcome,
        description,
    } = assessment;

    let entry = templates.entry_or_generic(category, tier);
    let mut actions = entry.actions.clone();
    if std::ptr::eq(entry, TemplateEntry::generic()) {
        warn!(
            category = %category,
            tier = %tier,
            "No template entry for tier, using generic recommendation"
        );
    } else {
        actions.extend(extra_actions);
    }
    let recommendation = entry.recommendation.clone();
    let confidence = outcome.confidence.min(100);

    let graded = CategoryAssessment {
        category,
        tier,
        severity: outcome.severity,
        priority: outcome.priority,
        confidence,
    };

    let insight = HealthInsight {
        id: category,
        title: templates.title(category).to_string(),
        category: category.display_name().to_string(),
        description,
        severity: outcome.severity,
        recommendation,
        actions,
        benefits: templates.benefits(category).to_string(),
        confidence,
        priority: outcome.priority,
    };

    (graded, insight)
}

/// Render a metric value for a description sentence
pub(crate) fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

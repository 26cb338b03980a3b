//! Glucose analyzer
//!
//! Fasting glucose in mg/dL against fixed bands. Diabetic-range and
//! hypoglycemic readings are `poor` regardless of anything else.

use super::{format_value, AnalysisContext, Assessment, CategoryAnalyzer, RuleCascade, TierOutcome};
use health_insights_shared::{CategoryId, GlucoseThresholds, MetricType, Priority, Severity, Tier};
use tracing::debug;

pub struct GlucoseAnalyzer;

impl GlucoseAnalyzer {
    pub fn cascade(t: &GlucoseThresholds) -> RuleCascade<'_, f64> {
        RuleCascade::new(Tier::Fair)
            .rule(Tier::Excellent, move |g: &f64| {
                *g >= t.excellent_min && *g < t.excellent_below
            })
            .rule(Tier::Good, move |g: &f64| {
                *g >= t.excellent_below && *g < t.good_below
            })
            .rule(Tier::Poor, move |g: &f64| {
                *g >= t.poor_at_or_above || *g < t.poor_below
            })
    }

    pub fn outcome(tier: Tier) -> TierOutcome {
        match tier {
            Tier::Excellent => TierOutcome::new(Severity::Normal, Priority::Low, 90),
            Tier::Good => TierOutcome::new(Severity::Normal, Priority::Low, 85),
            Tier::Poor => TierOutcome::new(Severity::Critical, Priority::High, 95),
            _ => TierOutcome::new(Severity::Warning, Priority::Medium, 85),
        }
    }
}

impl CategoryAnalyzer for GlucoseAnalyzer {
    fn category(&self) -> CategoryId {
        CategoryId::Glucose
    }

    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment> {
        let glucose = ctx.metric(MetricType::Glucose)?;
        let tier = Self::cascade(&ctx.thresholds.glucose).evaluate(&glucose);
        let outcome = Self::outcome(tier);

        debug!(
            category = "glucose",
            tier = %tier,
            confidence = outcome.confidence,
            "Assessed category"
        );

        Some(Assessment {
            tier,
            outcome,
            description: format!(
                "Your blood glucose reading is {} mg/dL.",
                format_value(glucose)
            ),
        })
    }

    fn personalize(&self, ctx: &AnalysisContext<'_>, _tier: Tier) -> Vec<String> {
        match ctx.profile {
            Some(profile) if profile.has_condition("diabetes") => vec![
                "Follow the glucose monitoring schedule in your diabetes care plan".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

//! Insight ranking and selection

use health_insights_shared::HealthInsight;

/// Order insights for display and keep the first `limit`
///
/// Priority descending, then confidence descending. The sort is stable,
/// so ties keep their emission order.
pub fn select(mut insights: Vec<HealthInsight>, limit: usize) -> Vec<HealthInsight> {
    insights.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.confidence.cmp(&a.confidence))
    });
    insights.truncate(limit);
    insights
}

//! Insight engine - runs every analyzer over a resolved snapshot

use crate::analyzers::{default_analyzers, AnalysisContext, CategoryAnalyzer};
use crate::config::{EngineConfig, DEFAULT_INSIGHT_LIMIT};
use crate::error::EngineResult;
use crate::reference::ReferenceData;
use crate::repositories::ReadingStore;
use crate::services::{ranker, wellness, VitalResolver};
use health_insights_shared::validation::get_field_display_label;
use health_insights_shared::{
    CategoryAssessment, CategoryId, HealthInsight, InsightRequest, InsightReport, InsightTemplates,
    MetricType, VitalSnapshot,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-category results of one run, in emission order
type Graded = Vec<(CategoryId, Option<(CategoryAssessment, HealthInsight)>)>;

/// Insight engine
///
/// Holds only read-only state, so one engine can serve concurrent
/// callers when the store supports concurrent reads.
pub struct InsightEngine<S> {
    store: S,
    reference: Arc<ReferenceData>,
    analyzers: Vec<Box<dyn CategoryAnalyzer>>,
    limit: usize,
}

impl<S: ReadingStore> InsightEngine<S> {
    pub fn new(store: S, reference: Arc<ReferenceData>, limit: usize) -> Self {
        info!(limit, "Insight engine initialized");
        Self {
            store,
            reference,
            analyzers: default_analyzers(),
            limit,
        }
    }

    /// Engine with builtin reference data and the default limit
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, Arc::new(ReferenceData::builtin()), DEFAULT_INSIGHT_LIMIT)
    }

    /// Engine using the configured limit and threshold tables
    pub fn from_config(store: S, config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let reference = ReferenceData::new(
            config.thresholds.clone(),
            InsightTemplates::builtin().clone(),
        )?;
        Ok(Self::new(store, Arc::new(reference), config.insights.limit))
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Current value of every metric, overrides first then history
    pub fn resolve(&self, overrides: &BTreeMap<MetricType, f64>) -> VitalSnapshot {
        VitalResolver::resolve(&self.store, overrides)
    }

    /// Ranked insights for a request, at most `limit` of them
    ///
    /// Input is not validated; nonsensical values fall through to each
    /// cascade's fallback tier.
    pub fn generate(&self, request: &InsightRequest) -> Vec<HealthInsight> {
        let (_, graded) = self.run(request);
        let insights = graded
            .into_iter()
            .filter_map(|(_, result)| result.map(|(_, insight)| insight))
            .collect();
        ranker::select(insights, self.limit)
    }

    /// Validate the request, then generate
    pub fn generate_checked(&self, request: &InsightRequest) -> EngineResult<Vec<HealthInsight>> {
        request.validate()?;
        Ok(self.generate(request))
    }

    /// Ranked insights with every category assessment from the same run
    pub fn report(&self, request: &InsightRequest) -> InsightReport {
        let (snapshot, graded) = self.run(request);

        let mut assessments = BTreeMap::new();
        let mut insights = Vec::new();
        for (category, result) in graded {
            match result {
                Some((assessment, insight)) => {
                    assessments.insert(category, Some(assessment));
                    insights.push(insight);
                }
                None => {
                    assessments.insert(category, None);
                }
            }
        }

        let wellness_score = wellness::wellness_score(
            assessments
                .values()
                .map(|assessment| assessment.map(|a| a.tier)),
        );

        let missing_metrics = VitalResolver::missing_metrics(&snapshot)
            .into_iter()
            .map(|metric| get_field_display_label(metric.as_str()).to_string())
            .collect();

        InsightReport {
            insights: ranker::select(insights, self.limit),
            assessments,
            wellness_score,
            missing_metrics,
        }
    }

    /// Composite 0-100 score for a request
    pub fn wellness_score(&self, request: &InsightRequest) -> u8 {
        let (_, graded) = self.run(request);
        wellness::wellness_score(
            graded
                .into_iter()
                .map(|(_, result)| result.map(|(assessment, _)| assessment.tier)),
        )
    }

    fn run(&self, request: &InsightRequest) -> (VitalSnapshot, Graded) {
        let snapshot = self.resolve(&request.vitals);
        let ctx = AnalysisContext::new(&snapshot, self.reference.thresholds())
            .with_profile(request.lifestyle.as_ref())
            .with_symptoms(request.all_symptoms());

        let templates = self.reference.templates();
        let graded = self
            .analyzers
            .iter()
            .map(|analyzer| {
                let result = analyzer.analyze(&ctx, templates);
                if result.is_none() {
                    debug!(
                        category = %analyzer.category(),
                        "Insufficient data, category skipped"
                    );
                }
                (analyzer.category(), result)
            })
            .collect();

        (snapshot, graded)
    }
}

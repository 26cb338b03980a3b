//! Health Insights WASM Module
//!
//! WebAssembly bindings that let the browser application run the insight
//! engine locally. Every entry point takes and returns JSON strings;
//! errors surface as JavaScript exceptions carrying the error message.

use health_insights_engine::services::wellness;
use health_insights_engine::{EngineResult, InsightEngine};
use health_insights_shared::{CategoryId, InsightRequest, Tier, VitalReading};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Ranked insights for a request
///
/// `history_json` is an array of stored readings; an empty string means
/// no history.
#[wasm_bindgen]
pub fn generate_insights(request_json: &str, history_json: &str) -> Result<String, JsValue> {
    generate_insights_json(request_json, history_json).map_err(to_js_error)
}

/// Ranked insights plus every category assessment and the wellness score
#[wasm_bindgen]
pub fn insight_report(request_json: &str, history_json: &str) -> Result<String, JsValue> {
    insight_report_json(request_json, history_json).map_err(to_js_error)
}

/// Wellness score from a `{category: tier | null}` object
#[wasm_bindgen]
pub fn wellness_score(tiers_json: &str) -> Result<u8, JsValue> {
    wellness_score_json(tiers_json).map_err(to_js_error)
}

fn to_js_error(error: health_insights_engine::EngineError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn engine_for(history_json: &str) -> EngineResult<InsightEngine<Vec<VitalReading>>> {
    let history: Vec<VitalReading> = if history_json.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(history_json)?
    };
    Ok(InsightEngine::with_defaults(history))
}

fn generate_insights_json(request_json: &str, history_json: &str) -> EngineResult<String> {
    let request: InsightRequest = serde_json::from_str(request_json)?;
    let insights = engine_for(history_json)?.generate_checked(&request)?;
    Ok(serde_json::to_string(&insights)?)
}

fn insight_report_json(request_json: &str, history_json: &str) -> EngineResult<String> {
    let request: InsightRequest = serde_json::from_str(request_json)?;
    request.validate()?;
    let report = engine_for(history_json)?.report(&request);
    Ok(serde_json::to_string(&report)?)
}

fn wellness_score_json(tiers_json: &str) -> EngineResult<u8> {
    let tiers: BTreeMap<CategoryId, Option<Tier>> = serde_json::from_str(tiers_json)?;
    Ok(wellness::wellness_score(tiers.into_values()))
}

//! Health Insights Engine
//!
//! Turns biometric and lifestyle readings into a short, prioritized list
//! of recommendations. The engine is synchronous and pure apart from
//! reading the injected history store.

pub mod analyzers;
pub mod config;
pub mod error;
pub mod reference;
pub mod repositories;
pub mod services;
pub mod telemetry;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use reference::ReferenceData;
pub use repositories::{InMemoryReadingStore, ReadingStore};
pub use services::InsightEngine;

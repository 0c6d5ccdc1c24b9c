//! HTTP adapters - the JSON rendering-surface boundary.

pub mod assessment;

pub use assessment::assessment_routes;
pub use assessment::AssessmentHandlers;

//! Session store port.
//!
//! Holds one [`FlowState`] per active assessment, keyed by [`AssessmentId`].
//! Sessions are never shared between respondents and never persisted:
//! an abandoned assessment simply stays unreferenced until the process ends.

use async_trait::async_trait;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::survey::FlowState;

/// Store port for per-session flow state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Inserts the state for a freshly created assessment.
    async fn insert(&self, id: AssessmentId, state: FlowState) -> Result<(), DomainError>;

    /// Returns the state for an assessment, or `None` if unknown.
    async fn get(&self, id: &AssessmentId) -> Result<Option<FlowState>, DomainError>;

    /// Replaces the state for an existing assessment.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the assessment was never inserted
    async fn update(&self, id: &AssessmentId, state: FlowState) -> Result<(), DomainError>;

    /// Removes an assessment's state, if present.
    async fn remove(&self, id: &AssessmentId) -> Result<(), DomainError>;
}

//! In-memory session store.
//!
//! The only store this service needs: answers are never persisted across
//! sessions, so flow state lives in a process-local map for the lifetime
//! of the assessment.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::survey::FlowState;
use crate::ports::SessionStore;

/// Process-local [`SessionStore`] backed by a `RwLock`ed map.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<AssessmentId, FlowState>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live sessions (diagnostics only).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no sessions are live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, id: AssessmentId, state: FlowState) -> Result<(), DomainError> {
        self.sessions.write().await.insert(id, state);
        Ok(())
    }

    async fn get(&self, id: &AssessmentId) -> Result<Option<FlowState>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn update(&self, id: &AssessmentId, state: FlowState) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(id) {
            Some(slot) => {
                *slot = state;
                Ok(())
            }
            None => Err(DomainError::session_not_found(id)),
        }
    }

    async fn remove(&self, id: &AssessmentId) -> Result<(), DomainError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}

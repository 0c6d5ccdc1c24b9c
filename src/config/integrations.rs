//! External integration configuration
//!
//! Carries the optional OpenAI API key the deployment may supply. The
//! assessment engine is fully rule-based and never calls the API; the key
//! exists so integration layers that expect it do not crash when present,
//! and startup only warns when it is absent.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Integration token configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationsConfig {
    /// OpenAI API key (optional, unused by the core engine)
    pub openai_api_key: Option<Secret<String>>,
}

impl IntegrationsConfig {
    /// Check if an OpenAI key is configured
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate integration configuration
    ///
    /// The key is optional by design; a missing key is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

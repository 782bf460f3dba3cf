//! Environment-level configuration, consumed not owned.
//!
//! Nothing here is validated beyond presence and defaulting; the endpoint
//! address and model selector are external contracts supplied by whoever
//! deploys the relay.

/// Endpoint used when `PARROT_INFERENCE_URL` is unset.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Model selector used when `PARROT_MODEL_ID` is unset.
pub const DEFAULT_MODEL_ID: &str = "base";

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Base address of the text-generation endpoint.
    pub endpoint: String,
    /// Model/identity selector, forwarded to logs only.
    pub model_id: String,
    /// Resource identifier of this deployment, used to derive the operating
    /// region annotation. Absent outside managed deployments.
    pub service_arn: Option<String>,
}

impl InferenceConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or("PARROT_INFERENCE_URL", DEFAULT_ENDPOINT),
            model_id: env_or("PARROT_MODEL_ID", DEFAULT_MODEL_ID),
            service_arn: std::env::var("PARROT_SERVICE_ARN")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Configuration pointing at an explicit endpoint; used by tests and by
    /// CLI flag overrides.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            service_arn: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = InferenceConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
        assert!(config.service_arn.is_none());
    }

    #[test]
    fn with_endpoint_keeps_other_defaults() {
        let config = InferenceConfig::with_endpoint("http://10.0.0.5:9000");
        assert_eq!(config.endpoint, "http://10.0.0.5:9000");
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    }
}

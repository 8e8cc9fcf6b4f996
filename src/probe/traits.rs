use async_trait::async_trait;

use super::types::{ProbeResult, ProbeTarget};

/// Diagnostic checks against an inference backend.
///
/// Implementations never return an error: every failure is folded into a
/// `ProbeResult` with `success: false`.
#[async_trait]
pub trait Probe: Send + Sync {
    /// List the available models to verify project, location and token
    async fn connect(&self, target: &ProbeTarget) -> ProbeResult;

    /// Run a tiny generation request against `model_id`, or the default model
    async fn generate(&self, target: &ProbeTarget, model_id: Option<&str>) -> ProbeResult;
}

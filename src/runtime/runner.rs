use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::probe::{Probe, ProbeCheck, ProbeResult, ProbeTarget};

/// One executed check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub check: ProbeCheck,
    pub result: ProbeResult,
    /// Wall-clock time of the request in milliseconds
    pub duration_ms: u128,
}

/// Result of a probe run. Holds no credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    pub project: String,
    pub location: String,
    pub checked_at: DateTime<Utc>,
    pub checks: Vec<CheckOutcome>,
}

impl ProbeReport {
    /// True when every executed check succeeded
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.result.success)
    }
}

/// Runs checks one after another against a single target
pub struct ProbeRunner<P: Probe> {
    probe: P,
}

impl<P: Probe> ProbeRunner<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Execute `checks` in order; failures never stop later checks
    pub async fn run(
        &self,
        checks: &[ProbeCheck],
        target: &ProbeTarget,
        model_id: Option<&str>,
    ) -> ProbeReport {
        let checked_at = Utc::now();
        let mut outcomes = Vec::with_capacity(checks.len());

        for &check in checks {
            let start_time = Instant::now();
            let result = match check {
                ProbeCheck::Connect => self.probe.connect(target).await,
                ProbeCheck::Generate => self.probe.generate(target, model_id).await,
            };

            outcomes.push(CheckOutcome {
                check,
                result,
                duration_ms: start_time.elapsed().as_millis(),
            });
        }

        ProbeReport {
            project: target.project.clone(),
            location: target.location.clone(),
            checked_at,
            checks: outcomes,
        }
    }
}

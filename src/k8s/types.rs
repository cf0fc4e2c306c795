use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{ContainerStatus, Pod};
use serde::{Deserialize, Serialize};

/// Coarse lifecycle state of a pod, as reported in `status.phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl Phase {
    /// Missing or unrecognized phases map to `Unknown`.
    pub fn from_api(phase: Option<&str>) -> Self {
        match phase {
            Some("Pending") => Phase::Pending,
            Some("Running") => Phase::Running,
            Some("Succeeded") => Phase::Succeeded,
            Some("Failed") => Phase::Failed,
            _ => Phase::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Pending => "Pending",
            Phase::Running => "Running",
            Phase::Succeeded => "Succeeded",
            Phase::Failed => "Failed",
            Phase::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Readiness and restarts of a single container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubComponentStatus {
    pub ready: bool,
    pub restart_count: u32,
}

impl SubComponentStatus {
    pub fn new(ready: bool, restart_count: u32) -> Self {
        Self {
            ready,
            restart_count,
        }
    }

    pub fn from_k8s_container_status(status: &ContainerStatus) -> Self {
        Self {
            ready: status.ready,
            // The API type is i32; a negative count is never meaningful.
            restart_count: status.restart_count.max(0) as u32,
        }
    }
}

/// One pod from the fetched snapshot, reduced to what the node report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadInstance {
    pub name: String,
    /// Empty when the pod has not been scheduled.
    pub host_name: String,
    pub phase: Phase,
    pub start_time: Option<DateTime<Utc>>,
    pub sub_component_statuses: Vec<SubComponentStatus>,
}

impl WorkloadInstance {
    pub fn from_k8s_pod(pod: &Pod) -> Self {
        let spec = pod.spec.as_ref();
        let status = pod.status.as_ref();

        let sub_component_statuses = status
            .and_then(|s| s.container_statuses.as_ref())
            .map(|statuses| {
                statuses
                    .iter()
                    .map(SubComponentStatus::from_k8s_container_status)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: pod.metadata.name.clone().unwrap_or_default(),
            host_name: spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
            phase: Phase::from_api(status.and_then(|s| s.phase.as_deref())),
            start_time: status.and_then(|s| s.start_time.as_ref()).map(|t| t.0),
            sub_component_statuses,
        }
    }
}

use crate::k8s::WorkloadInstance;

/// Container readiness of one pod, reduced to the counts the READY and
/// RESTARTS columns show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadinessSummary {
    pub total_sub_components: usize,
    pub ready_sub_components: usize,
    pub total_restarts: u64,
}

impl ReadinessSummary {
    /// `ready/total`, e.g. `1/2`. A pod without containers shows `0/0`.
    pub fn ready_ratio(&self) -> String {
        format!("{}/{}", self.ready_sub_components, self.total_sub_components)
    }
}

pub fn summarize(instance: &WorkloadInstance) -> ReadinessSummary {
    let statuses = &instance.sub_component_statuses;

    ReadinessSummary {
        total_sub_components: statuses.len(),
        ready_sub_components: statuses.iter().filter(|s| s.ready).count(),
        total_restarts: statuses.iter().map(|s| u64::from(s.restart_count)).sum(),
    }
}

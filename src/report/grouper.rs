use crate::k8s::WorkloadInstance;
use std::collections::BTreeMap;

/// Pods keyed by the node they run on. The empty key holds unscheduled pods.
///
/// Hosts iterate in lexicographic order so repeated runs print the same report.
pub type HostGroups = BTreeMap<String, Vec<WorkloadInstance>>;

/// Partition a snapshot by host, keeping snapshot order within each host.
pub fn group<I>(instances: I) -> HostGroups
where
    I: IntoIterator<Item = WorkloadInstance>,
{
    let mut groups = HostGroups::new();

    for instance in instances {
        groups
            .entry(instance.host_name.clone())
            .or_default()
            .push(instance);
    }

    groups
}

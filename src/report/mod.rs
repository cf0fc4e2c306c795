//! Per-node pod report
//!
//! Fetch a snapshot once, group it by node, and render one aligned table per
//! node. Only the fetch can fail; once it succeeds the report always renders.

pub mod grouper;
pub mod render;
pub mod summary;
pub mod table;

pub use grouper::{group, HostGroups};
pub use render::render;
pub use summary::{summarize, ReadinessSummary};

use crate::k8s::{InstanceSource, NamespaceScope};
use crate::Result;
use tracing::info;

pub async fn build_report<S>(source: &S, scope: &NamespaceScope) -> Result<String>
where
    S: InstanceSource + ?Sized,
{
    let instances = source.list_instances(scope).await?;
    let pod_count = instances.len();

    let groups = group(instances);
    info!("Grouped {} pods onto {} nodes", pod_count, groups.len());

    Ok(render(&groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::{Phase, WorkloadInstance};
    use crate::NodeviewError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticSource {
        instances: Vec<WorkloadInstance>,
        seen_scopes: Mutex<Vec<NamespaceScope>>,
    }

    #[async_trait]
    impl InstanceSource for StaticSource {
        async fn list_instances(&self, scope: &NamespaceScope) -> Result<Vec<WorkloadInstance>> {
            self.seen_scopes.lock().unwrap().push(scope.clone());
            Ok(self.instances.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl InstanceSource for FailingSource {
        async fn list_instances(&self, _scope: &NamespaceScope) -> Result<Vec<WorkloadInstance>> {
            Err(NodeviewError::fetch("list pods", "connection refused"))
        }
    }

    #[tokio::test]
    async fn test_build_report_fetches_once_with_scope() {
        let source = StaticSource {
            instances: vec![WorkloadInstance {
                name: "api".to_string(),
                host_name: "worker-1".to_string(),
                phase: Phase::Running,
                start_time: None,
                sub_component_statuses: Vec::new(),
            }],
            seen_scopes: Mutex::new(Vec::new()),
        };
        let scope = NamespaceScope::Namespaced("prod".to_string());

        let report = build_report(&source, &scope).await.unwrap();

        assert!(report.starts_with("worker-1\n"));
        assert_eq!(*source.seen_scopes.lock().unwrap(), vec![scope]);
    }

    #[tokio::test]
    async fn test_build_report_empty_snapshot() {
        let source = StaticSource {
            instances: Vec::new(),
            seen_scopes: Mutex::new(Vec::new()),
        };

        let report = build_report(&source, &NamespaceScope::All).await.unwrap();

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_build_report_propagates_fetch_error() {
        let err = build_report(&FailingSource, &NamespaceScope::All)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to list pods: connection refused");
    }
}

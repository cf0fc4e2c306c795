use crate::k8s::client::K8sClient;
use crate::k8s::types::WorkloadInstance;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Which namespaces a listing covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamespaceScope {
    #[default]
    All,
    Namespaced(String),
}

impl NamespaceScope {
    pub fn from_option(namespace: Option<String>) -> Self {
        match namespace {
            Some(ns) if !ns.is_empty() => NamespaceScope::Namespaced(ns),
            _ => NamespaceScope::All,
        }
    }
}

impl std::fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamespaceScope::All => write!(f, "all namespaces"),
            NamespaceScope::Namespaced(ns) => write!(f, "namespace {}", ns),
        }
    }
}

/// Produces the snapshot of pods the report is built from.
#[async_trait]
pub trait InstanceSource: Send + Sync {
    async fn list_instances(&self, scope: &NamespaceScope) -> Result<Vec<WorkloadInstance>>;
}

#[async_trait]
impl InstanceSource for K8sClient {
    async fn list_instances(&self, scope: &NamespaceScope) -> Result<Vec<WorkloadInstance>> {
        debug!("Listing pods in {}", scope);

        let pods = self.list_pods(scope).await?;

        info!("Fetched {} pods from {}", pods.len(), scope);

        Ok(pods.iter().map(WorkloadInstance::from_k8s_pod).collect())
    }
}

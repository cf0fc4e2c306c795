use crate::config::ClusterConfig;
use crate::k8s::source::NamespaceScope;
use crate::{NodeviewError, Result};
use k8s_openapi::api::core::v1::Pod;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::{debug, info};

pub struct K8sClient {
    client: Client,
}

impl K8sClient {
    pub async fn try_default() -> Result<Self> {
        debug!("Initializing Kubernetes client");

        let client = Client::try_default()
            .await
            .map_err(|e| NodeviewError::fetch("create Kubernetes client", e))?;

        info!("Successfully connected to Kubernetes cluster");

        Ok(Self { client })
    }

    pub async fn from_config(cluster: &ClusterConfig) -> Result<Self> {
        if cluster.is_inferred() {
            return Self::try_default().await;
        }

        debug!(
            "Initializing Kubernetes client (kubeconfig: {:?}, context: {:?})",
            cluster.kubeconfig, cluster.context
        );

        let options = KubeConfigOptions {
            context: cluster.context.clone(),
            ..Default::default()
        };

        let config = match &cluster.kubeconfig {
            Some(path) => {
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    NodeviewError::fetch(&format!("read kubeconfig {}", path.display()), e)
                })?;
                Config::from_custom_kubeconfig(kubeconfig, &options).await
            }
            None => Config::from_kubeconfig(&options).await,
        }
        .map_err(|e| NodeviewError::fetch("load kubeconfig", e))?;

        let client = Client::try_from(config)
            .map_err(|e| NodeviewError::fetch("create Kubernetes client", e))?;

        info!("Successfully connected to Kubernetes cluster");

        Ok(Self { client })
    }

    pub fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub fn pods_all(&self) -> Api<Pod> {
        Api::all(self.client.clone())
    }

    pub async fn list_pods(&self, scope: &NamespaceScope) -> Result<Vec<Pod>> {
        let pods = match scope {
            NamespaceScope::Namespaced(ns) => self.pods(ns),
            NamespaceScope::All => self.pods_all(),
        };

        let pod_list = pods
            .list(&Default::default())
            .await
            .map_err(|e| NodeviewError::fetch("list pods", e))?;

        Ok(pod_list.items)
    }
}

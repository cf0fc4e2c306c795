use std::path::PathBuf;

/// Connection settings for the Kubernetes API.
///
/// With every field unset the client falls back to kube's own inference:
/// `KUBECONFIG`, then `~/.kube/config`, then the in-cluster service account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterConfig {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

impl ClusterConfig {
    pub fn new(kubeconfig: Option<PathBuf>, context: Option<String>) -> Self {
        Self {
            kubeconfig,
            context,
        }
    }

    pub fn is_inferred(&self) -> bool {
        self.kubeconfig.is_none() && self.context.is_none()
    }
}

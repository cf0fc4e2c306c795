use crate::cli::Commands;
use crate::config::ClusterConfig;
use crate::k8s::{K8sClient, NamespaceScope};
use crate::report::build_report;
use crate::Result;
use tracing::info;

pub async fn handle_command(
    command: Commands,
    cluster: &ClusterConfig,
    scope: &NamespaceScope,
) -> Result<()> {
    match command {
        Commands::Nodes => handle_nodes(cluster, scope).await,
    }
}

async fn handle_nodes(cluster: &ClusterConfig, scope: &NamespaceScope) -> Result<()> {
    info!("Node view requested for {}", scope);

    let client = K8sClient::from_config(cluster).await?;
    let report = build_report(&client, scope).await?;

    print!("{}", report);
    Ok(())
}

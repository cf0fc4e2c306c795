pub mod commands;

use crate::config::ClusterConfig;
use crate::k8s::NamespaceScope;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nodeview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kubernetes pods at a glance, grouped by node", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to the kubeconfig file")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long, global = true, help = "Kubeconfig context to use")]
    pub context: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Kubernetes namespace (all namespaces if omitted)"
    )]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn cluster_config(&self) -> ClusterConfig {
        ClusterConfig::new(self.kubeconfig.clone(), self.context.clone())
    }

    pub fn namespace_scope(&self) -> NamespaceScope {
        NamespaceScope::from_option(self.namespace.clone())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    #[command(
        visible_alias = "node",
        about = "Lists pods grouped by the node",
        long_about = "Lists pods grouped by node"
    )]
    Nodes,
}

pub mod client;
pub mod source;
pub mod types;

pub use client::K8sClient;
pub use source::{InstanceSource, NamespaceScope};
pub use types::{Phase, SubComponentStatus, WorkloadInstance};

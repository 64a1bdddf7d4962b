mod aggregate;
#[allow(clippy::module_inception)]
mod cluster;
mod ranking;

pub use aggregate::{build_cluster, build_clusters};
pub use cluster::Cluster;
pub use ranking::{relabeled_partition, sort_and_relabel};

use super::Cluster;
use crate::partition::Partition;
use std::sync::Arc;

/// Orders clusters by average counts, largest first, and renumbers them by
/// rank. Clusters with equal averages keep their relative order.
pub fn sort_and_relabel(clusters: &mut [Cluster]) {
    clusters.sort_by(|a, b| b.average_counts().total_cmp(&a.average_counts()));
    for (rank, cluster) in clusters.iter_mut().enumerate() {
        cluster.set_identifier(rank);
    }
}

/// The partition whose subsets follow the order of `clusters`.
pub fn relabeled_partition(clusters: &[Cluster]) -> Partition {
    let mut partition = Partition::empty();
    for cluster in clusters {
        partition.push_shared(Arc::clone(cluster.sites()));
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{ModelId, Subset};
    use crate::utils::NUM_BASES;

    fn cluster_with_mass(name: &str, mass: f64, identifier: usize) -> Cluster {
        let model_id = ModelId::new(name, 2);
        Cluster::new(
            vec![vec![mass / 2.0, mass / 2.0]; NUM_BASES],
            vec![0.0; 2],
            vec![vec![1.0; 2]; NUM_BASES],
            vec![0.0; 2],
            1,
            identifier,
            model_id.clone(),
            Arc::new(Subset::new(model_id)),
        )
        .unwrap()
    }

    fn names(clusters: &[Cluster]) -> Vec<&str> {
        clusters.iter().map(|c| c.model_id().name.as_str()).collect()
    }

    #[test]
    fn sort_descending_and_relabel() {
        let mut clusters = vec![
            cluster_with_mass("small", 1.0, 0),
            cluster_with_mass("large", 10.0, 1),
            cluster_with_mass("medium", 5.0, 2),
        ];
        sort_and_relabel(&mut clusters);
        assert_eq!(names(&clusters), vec!["large", "medium", "small"]);
        let ids: Vec<_> = clusters.iter().map(Cluster::identifier).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn ties_keep_original_order() {
        let mut clusters = vec![
            cluster_with_mass("a", 2.0, 0),
            cluster_with_mass("b", 4.0, 1),
            cluster_with_mass("c", 2.0, 2),
            cluster_with_mass("d", 4.0, 3),
            cluster_with_mass("e", 2.0, 4),
        ];
        sort_and_relabel(&mut clusters);
        assert_eq!(names(&clusters), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn relabeled_partition_follows_rank() {
        let mut clusters = vec![
            cluster_with_mass("a", 1.0, 0),
            cluster_with_mass("b", 3.0, 1),
        ];
        sort_and_relabel(&mut clusters);
        let partition = relabeled_partition(&clusters);
        assert_eq!(partition.to_string(), "b:2:{}, a:2:{}");
        assert!(relabeled_partition(&[]).is_empty());
    }
}

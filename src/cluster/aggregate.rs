use super::Cluster;
use crate::partition::{Partition, Range, Subset};
use crate::utils::{
    complement_code, math::zeros, IndexPolicy, MotifError, PriorTable, Result, SoftColumn,
    SoftSequence, GAP, NUM_BASES,
};
use rayon::prelude::*;
use std::sync::Arc;

fn site_column<'a>(
    sequences: &'a [SoftSequence],
    site: &Range,
    offset: usize,
) -> Result<&'a SoftColumn> {
    let position = site.position.checked_add(offset);
    let sequence = sequences.get(site.sequence_index);
    sequence
        .zip(position)
        .and_then(|(s, position)| s.get(position))
        .ok_or(MotifError::IndexOutOfRange {
            sequence: site.sequence_index,
            position: position.unwrap_or(usize::MAX),
            available: sequence.map_or(0, Vec::len),
        })
}

/// Accumulates the soft nucleotide counts of all sites in `subset`.
///
/// Reverse sites contribute their reverse complement: column `j` of the site
/// lands in motif column `L - 1 - j` with complemented bases. Gap mass is
/// added in sequence order for both orientations.
pub fn build_cluster(
    subset: &Arc<Subset>,
    sequences: &[SoftSequence],
    priors: &PriorTable,
    identifier: usize,
    policy: IndexPolicy,
) -> Result<Cluster> {
    let model_id = subset.model_id().clone();
    let length = model_id.length;
    let prior = priors.get(&model_id.name)?;

    let mut counts = zeros(NUM_BASES, length);
    let mut counts_gap = vec![0.0; length];
    let alpha = (0..NUM_BASES).map(|i| vec![prior[i]; length]).collect();
    let alpha_gap = vec![prior[GAP]; length];

    for site in subset.ranges() {
        let mut skipped = 0;
        for j in 0..site.length {
            let column = match site_column(sequences, site, j) {
                Ok(column) => column,
                Err(e) if policy == IndexPolicy::Lenient => {
                    log::debug!("{}", e);
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if site.reverse {
                for (i, row) in counts.iter_mut().enumerate() {
                    row[site.length - 1 - j] += column[complement_code(i)];
                }
            } else {
                for (i, row) in counts.iter_mut().enumerate() {
                    row[j] += column[i];
                }
            }
            counts_gap[j] += column[GAP];
        }
        if skipped > 0 {
            log::warn!(
                "Skipped {} of {} columns of site {} in {}: out of range",
                skipped,
                site.length,
                site,
                model_id
            );
        }
    }

    Cluster::new(
        counts,
        counts_gap,
        alpha,
        alpha_gap,
        subset.len(),
        identifier,
        model_id,
        Arc::clone(subset),
    )
}

/// Builds one cluster per subset, in partition order. Identifiers are the
/// subset indices.
pub fn build_clusters(
    partition: &Partition,
    sequences: &[SoftSequence],
    priors: &PriorTable,
    policy: IndexPolicy,
) -> Result<Vec<Cluster>> {
    partition
        .subsets()
        .par_iter()
        .enumerate()
        .map(|(identifier, subset)| build_cluster(subset, sequences, priors, identifier, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{parse_partition, ModelId};
    use approx::assert_abs_diff_eq;

    fn one_hot_sequences() -> Vec<SoftSequence> {
        vec![vec![
            [1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
        ]]
    }

    fn zero_priors() -> PriorTable {
        let mut priors = PriorTable::new();
        priors.insert("x", [0.0; 5]);
        priors
    }

    fn first_subset(text: &str) -> Arc<Subset> {
        Arc::clone(&parse_partition(text).unwrap().subsets()[0])
    }

    #[test]
    fn forward_and_reverse_sites() {
        let subset = first_subset("x:3:{(0,0), (0,0)!}");
        let cluster = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Strict,
        )
        .unwrap();
        let expected = vec![
            vec![2.0, 0.0, 0.0], // G
            vec![0.0, 1.0, 0.0], // A
            vec![0.0, 1.0, 2.0], // T
            vec![0.0, 0.0, 0.0], // C
        ];
        assert_eq!(cluster.counts(), &expected);
        assert_eq!(cluster.components(), 2);
        assert_eq!(cluster.model_id(), &ModelId::new("x", 3));
        assert!(Arc::ptr_eq(cluster.sites(), &subset));
    }

    #[test]
    fn soft_counts_and_gaps() {
        let sequences = vec![vec![
            [0.5, 0.25, 0.0, 0.0, 0.25],
            [0.0, 0.0, 0.1, 0.7, 0.2],
        ]];
        let subset = first_subset("x:2:{(0,0)!}");
        let cluster =
            build_cluster(&subset, &sequences, &zero_priors(), 3, IndexPolicy::Strict).unwrap();
        // column 1 of the site lands in motif column 0, complemented
        assert_abs_diff_eq!(cluster.counts()[0][0], 0.7); // G <- C
        assert_abs_diff_eq!(cluster.counts()[1][0], 0.1); // A <- T
        assert_abs_diff_eq!(cluster.counts()[3][1], 0.5); // C <- G
        assert_abs_diff_eq!(cluster.counts()[2][1], 0.25); // T <- A
        // gaps are not reversed
        assert_eq!(cluster.counts_gap(), &[0.25, 0.2]);
        assert_eq!(cluster.identifier(), 3);
    }

    #[test]
    fn prior_is_constant_across_columns() {
        let mut priors = PriorTable::new();
        priors.insert("x", [1.0, 2.0, 3.0, 4.0, 0.5]);
        let subset = first_subset("x:3:{(0,0)}");
        let cluster =
            build_cluster(&subset, &one_hot_sequences(), &priors, 0, IndexPolicy::Strict)
                .unwrap();
        assert_eq!(cluster.alpha()[2], vec![3.0; 3]);
        assert_eq!(cluster.alpha_gap(), &[0.5; 3]);
    }

    #[test]
    fn position_at_usize_max_is_out_of_range() {
        let subset = first_subset(&format!("x:2:{{(0,{})}}", usize::MAX));
        let cluster = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(cluster.counts(), &vec![vec![0.0; 2]; NUM_BASES]);
        assert_eq!(cluster.counts_gap(), &[0.0; 2]);

        let result = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Strict,
        );
        assert!(matches!(result, Err(MotifError::IndexOutOfRange { .. })));
    }

    #[test]
    fn missing_prior() {
        let subset = first_subset("y:3:{(0,0)}");
        let result = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Strict,
        );
        assert!(matches!(result, Err(MotifError::PriorNotFound(name)) if name == "y"));
    }

    #[test]
    fn out_of_range_strict() {
        let subset = first_subset("x:3:{(0,1)}");
        let result = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Strict,
        );
        assert!(matches!(
            result,
            Err(MotifError::IndexOutOfRange {
                sequence: 0,
                position: 3,
                available: 3
            })
        ));

        let subset = first_subset("x:3:{(4,0)}");
        let result = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Strict,
        );
        assert!(matches!(result, Err(MotifError::IndexOutOfRange { .. })));
    }

    #[test]
    fn out_of_range_lenient_skips_columns() {
        let subset = first_subset("x:3:{(0,1), (5,0)}");
        let cluster = build_cluster(
            &subset,
            &one_hot_sequences(),
            &zero_priors(),
            0,
            IndexPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(cluster.counts()[1], vec![1.0, 0.0, 0.0]);
        assert_eq!(cluster.counts()[2], vec![0.0, 1.0, 0.0]);
        assert_eq!(cluster.components(), 2);
    }

    #[test]
    fn build_all_clusters_in_partition_order() {
        let partition = parse_partition("x:1:{(0,0)}, x:2:{(0,1)}, x:3:{}").unwrap();
        let clusters = build_clusters(
            &partition,
            &one_hot_sequences(),
            &zero_priors(),
            IndexPolicy::Strict,
        )
        .unwrap();
        let summary: Vec<_> = clusters
            .iter()
            .map(|c| (c.identifier(), c.len(), c.components()))
            .collect();
        assert_eq!(summary, vec![(0, 1, 1), (1, 2, 1), (2, 3, 0)]);
    }
}

use super::cluster::load_ranked_clusters;
use crate::cli::CompareArgs;
use crate::cluster::Cluster;
use crate::motif::best_offset;
use crate::utils::{Background, Result};
use itertools::Itertools;
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, PartialEq)]
struct Comparison {
    first: usize,
    second: usize,
    offset: isize,
    divergence: f64,
}

/// Best-offset divergence between the motifs of every pair of clusters of
/// equal length.
fn compare_clusters(
    clusters: &[Cluster],
    bg: &Background,
    max_shift: usize,
) -> Result<Vec<Comparison>> {
    let motifs = clusters
        .iter()
        .map(|c| c.motif())
        .collect::<Result<Vec<_>>>()?;

    let mut comparisons = Vec::new();
    for ((i, first), (j, second)) in clusters.iter().enumerate().tuple_combinations() {
        if first.len() != second.len() {
            log::debug!(
                "Skipping cluster_{} and cluster_{}: lengths {} and {} differ",
                first.identifier(),
                second.identifier(),
                first.len(),
                second.len()
            );
            continue;
        }
        let max_shift = max_shift.min(first.len().saturating_sub(1));
        let (offset, divergence) = best_offset(bg, &motifs[i], &motifs[j], max_shift)?;
        comparisons.push(Comparison {
            first: first.identifier(),
            second: second.identifier(),
            offset,
            divergence,
        });
    }
    Ok(comparisons)
}

pub fn compare(args: CompareArgs) -> Result<()> {
    let clusters = load_ranked_clusters(&args.input)?;
    let comparisons = compare_clusters(&clusters, &args.input.background, args.max_shift)?;

    let mut writer = BufWriter::new(io::stdout().lock());
    writeln!(writer, "#first\tsecond\toffset\tdivergence")?;
    for comparison in &comparisons {
        writeln!(
            writer,
            "cluster_{}\tcluster_{}\t{}\t{:.6}",
            comparison.first, comparison.second, comparison.offset, comparison.divergence
        )?;
    }
    writer.flush()?;
    Ok(())
}

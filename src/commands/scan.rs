use super::cluster::load_ranked_clusters;
use crate::cli::ScanArgs;
use crate::cluster::Cluster;
use crate::motif::{scan as scan_sequence, ScanHit};
use crate::utils::{open_input_reader, read_fasta, Background, Result};
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

/// Hits of both strands of `cluster` on `sequence`, ordered by position.
fn scan_both_strands(
    cluster: &Cluster,
    bg: &Background,
    sequence: &[u8],
    threshold: f64,
) -> Result<Vec<(Strand, ScanHit)>> {
    let forward = cluster.pwm(bg)?;
    let reverse = cluster.reverse_complement().pwm(bg)?;

    let mut hits: Vec<(Strand, ScanHit)> = scan_sequence(&forward, sequence, threshold)
        .into_iter()
        .map(|hit| (Strand::Forward, hit))
        .chain(
            scan_sequence(&reverse, sequence, threshold)
                .into_iter()
                .map(|hit| (Strand::Reverse, hit)),
        )
        .collect();
    hits.sort_by_key(|(strand, hit)| (hit.position, *strand == Strand::Reverse));
    Ok(hits)
}

pub fn scan(args: ScanArgs) -> Result<()> {
    let clusters = load_ranked_clusters(&args.input)?;
    let targets = read_fasta(open_input_reader(&args.targets_path)?)?;
    log::info!(
        "Scanning {} sequences with {} clusters",
        targets.len(),
        clusters.len()
    );

    let mut writer = BufWriter::new(io::stdout().lock());
    writeln!(writer, "#target\tcluster\tposition\tstrand\tscore")?;
    let mut num_hits = 0;
    for (name, sequence) in &targets {
        for cluster in &clusters {
            let hits = scan_both_strands(cluster, &args.input.background, sequence, args.threshold)?;
            for (strand, hit) in &hits {
                writeln!(
                    writer,
                    "{}\tcluster_{}\t{}\t{}\t{:.4}",
                    name,
                    cluster.identifier(),
                    hit.position,
                    strand.symbol(),
                    hit.score
                )?;
            }
            num_hits += hits.len();
        }
    }
    writer.flush()?;
    log::info!("Reported {} hits", num_hits);
    Ok(())
}

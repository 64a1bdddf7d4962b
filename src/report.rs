use crate::cluster::Cluster;
use crate::motif;
use crate::partition::Partition;
use crate::utils::{Background, Nucleotide, Result};
use itertools::Itertools;
use std::io::Write;

fn format_row(values: &[f64]) -> String {
    values.iter().map(|v| format!("{:.6}", v)).join("\t")
}

pub fn write_cluster<W: Write>(writer: &mut W, cluster: &Cluster, bg: &Background) -> Result<()> {
    let motif = cluster.motif()?;
    let pwm = motif::pwm(&motif, bg)?;

    writeln!(
        writer,
        ">cluster_{}\tmodel={}\tlength={}\tcomponents={}\taverage_counts={:.6}\tr_sequence={:.6}\tinformation_content={:.6}",
        cluster.identifier(),
        cluster.model_id().name,
        cluster.len(),
        cluster.components(),
        cluster.average_counts(),
        motif::r_sequence(&motif),
        motif::information_content(bg, &motif)?,
    )?;
    for (label, matrix) in [("motif", &motif), ("pwm", &pwm)] {
        for base in Nucleotide::ALL {
            writeln!(
                writer,
                "{}\t{}\t{}",
                label,
                base.as_char(),
                format_row(&matrix[base.code()])
            )?;
        }
    }
    writeln!(writer, "entropy\t.\t{}", format_row(&motif::entropy(&motif)))?;
    Ok(())
}

/// Writes the relabeled partition followed by one block per cluster.
pub fn write_report<W: Write>(
    writer: &mut W,
    partition: &Partition,
    clusters: &[Cluster],
    bg: &Background,
) -> Result<()> {
    writeln!(writer, "#partition\t{}", partition)?;
    for cluster in clusters {
        write_cluster(writer, cluster, bg)?;
    }
    writer.flush()?;
    Ok(())
}

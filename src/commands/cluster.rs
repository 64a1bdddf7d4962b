use crate::cli::{ClusterArgs, InputArgs};
use crate::cluster::{build_clusters, relabeled_partition, sort_and_relabel, Cluster};
use crate::partition::{parse_partition_list, Partition};
use crate::report::write_report;
use crate::utils::{
    open_input_reader, read_input_to_string, MotifError, PriorTable, Result, SoftSequences,
};
use rayon::ThreadPoolBuilder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time;

fn select_partition(mut partitions: Vec<Partition>, index: Option<usize>) -> Result<Partition> {
    let count = partitions.len();
    let index = match index {
        Some(index) => index,
        None => count
            .checked_sub(1)
            .ok_or_else(|| MotifError::Input("Partition file holds no partitions".to_string()))?,
    };
    if index >= count {
        return Err(MotifError::Input(format!(
            "Partition index {} is out of range, file holds {} partitions",
            index, count
        )));
    }
    Ok(partitions.swap_remove(index))
}

/// Loads the inputs, builds one cluster per subset and ranks them.
pub fn load_ranked_clusters(input: &InputArgs) -> Result<Vec<Cluster>> {
    let partitions = parse_partition_list(&read_input_to_string(&input.partitions_path)?)?;
    log::info!(
        "Read {} partitions from {}",
        partitions.len(),
        input.partitions_path.display()
    );
    let partition = select_partition(partitions, input.partition_index)?;
    if partition.is_empty() {
        log::warn!("Selected partition is empty");
    }

    let sequences = SoftSequences::from_reader(open_input_reader(&input.sequences_path)?)?;
    let priors = PriorTable::from_reader(open_input_reader(&input.priors_path)?)?;
    log::debug!(
        "Loaded {} sequences and {} priors",
        sequences.len(),
        priors.len()
    );

    let pool = ThreadPoolBuilder::new()
        .num_threads(input.num_threads)
        .build()
        .map_err(|e| MotifError::Input(format!("Failed to create thread pool: {}", e)))?;
    let mut clusters = pool.install(|| {
        build_clusters(
            &partition,
            sequences.as_slice(),
            &priors,
            input.index_policy,
        )
    })?;

    sort_and_relabel(&mut clusters);
    log::info!(
        "Built {} clusters from {} sites",
        clusters.len(),
        partition.num_sites()
    );
    Ok(clusters)
}

pub fn cluster(args: ClusterArgs) -> Result<()> {
    let start_timer = time::Instant::now();
    let clusters = load_ranked_clusters(&args.input)?;
    let partition = relabeled_partition(&clusters);

    let mut writer: Box<dyn Write> = match &args.output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_report(&mut writer, &partition, &clusters, &args.input.background)?;

    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::parse_partition;

    #[test]
    fn select_last_partition_by_default() {
        let partitions = vec![parse_partition("x:1:{}").unwrap(), Partition::empty()];
        assert!(select_partition(partitions, None).unwrap().is_empty());
    }

    #[test]
    fn select_partition_by_index() {
        let partitions = vec![parse_partition("x:1:{}").unwrap(), Partition::empty()];
        assert_eq!(select_partition(partitions, Some(0)).unwrap().len(), 1);
    }

    #[test]
    fn select_partition_out_of_range() {
        assert!(select_partition(Vec::new(), None).is_err());
        assert!(select_partition(vec![Partition::empty()], Some(1)).is_err());
    }
}

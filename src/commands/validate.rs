use crate::cli::ValidateArgs;
use crate::partition::{parse_partition, Partition};
use crate::utils::{read_input_to_string, Result};

pub fn validate(args: ValidateArgs) -> Result<()> {
    let text = read_input_to_string(&args.partitions_path)?;
    let mut error_count = 0;
    let mut success_count = 0;
    let mut empty_count = 0;
    let mut overlap_count = 0;
    let mut subset_counts = Vec::new();
    let mut site_counts = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_partition(line) {
            Ok(partition) => {
                if partition.is_empty() {
                    empty_count += 1;
                }
                overlap_count += count_overlaps(&partition, line_number + 1);
                subset_counts.push(partition.len());
                site_counts.extend(partition.subsets().iter().map(|s| s.len()));
                success_count += 1
            }
            Err(e) => {
                log::error!("{}", e.at_line(line_number + 1));
                error_count += 1;
            }
        }
    }

    let subset_stats = calculate_stats(&subset_counts);
    let site_stats = calculate_stats(&site_counts);

    let total = success_count + error_count;
    let success_percentage = (success_count as f64 / total as f64) * 100.0;
    let error_percentage = (error_count as f64 / total as f64) * 100.0;

    log::info!(
        "Subsets per Partition - Range: [{},{}], Median: {:.2}, Mean: {:.2}, StdDev: {:.2}",
        subset_stats.min,
        subset_stats.max,
        subset_stats.median,
        subset_stats.mean,
        subset_stats.std_dev
    );
    log::info!(
        "Sites per Subset - Range: [{},{}], Median: {:.2}, Mean: {:.2}, StdDev: {:.2}",
        site_stats.min,
        site_stats.max,
        site_stats.median,
        site_stats.mean,
        site_stats.std_dev
    );
    log::info!(
        "Empty partitions={}, overlapping site pairs={}",
        empty_count,
        overlap_count
    );

    match error_count {
        0 => log::info!("Validation successful. Partitions pass={}", success_count),
        _ => log::info!(
            "Validation failed. Partitions pass={} ({:.2}%), fail={} ({:.2}%)",
            success_count,
            success_percentage,
            error_count,
            error_percentage
        ),
    }

    Ok(())
}

// Overlaps between subsets are reported, not rejected.
fn count_overlaps(partition: &Partition, line_number: usize) -> usize {
    let overlaps = partition.overlapping_sites();
    for (a, b) in &overlaps {
        log::info!(
            "Line {}: sites {} and {} in sequence {} overlap",
            line_number,
            a,
            b,
            a.sequence_index
        );
    }
    overlaps.len()
}

fn calculate_stats(data: &[usize]) -> Stats {
    if data.is_empty() {
        return Stats::default();
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let len = sorted.len();
    let median = if len % 2 == 0 {
        (sorted[len / 2 - 1] + sorted[len / 2]) as f64 / 2.0
    } else {
        sorted[len / 2] as f64
    };
    let sum: usize = sorted.iter().sum();
    let mean = sum as f64 / len as f64;
    let std_dev = (sorted
        .iter()
        .map(|&x| (x as f64 - mean).powi(2))
        .sum::<f64>()
        / len as f64)
        .sqrt();
    Stats {
        min: sorted[0],
        max: sorted[len - 1],
        mean,
        median,
        std_dev,
    }
}

#[derive(Debug, Default, PartialEq)]
struct Stats {
    min: usize,
    max: usize,
    mean: f64,
    median: f64,
    std_dev: f64,
}

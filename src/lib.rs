//! # tfmotif
//! Motif statistics for the output of a Dirichlet-process mixture sampler
//! over aligned transcription factor binding sites.
//!
//! The sampler assigns sites of a multiple alignment to clusters and writes
//! each sample as a partition line such as
//! `baseline-default:6:{(0, 3), (0, 41)!, (2, 10)}`. This crate parses those
//! partitions, accumulates the soft nucleotide counts of every cluster
//! (reverse complementing sites marked with `!`), and derives posterior
//! motifs, PWMs and information-theoretic summaries.
//!
//! ```
//! use tfmotif::cluster::{build_clusters, sort_and_relabel};
//! use tfmotif::partition::parse_partition;
//! use tfmotif::utils::{IndexPolicy, PriorTable};
//!
//! let partition = parse_partition("x:2:{(0, 0), (0, 0)!}").unwrap();
//! let sequences = vec![vec![[1.0, 0.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0, 0.0]]];
//! let mut priors = PriorTable::new();
//! priors.insert("x", [1.0, 1.0, 1.0, 1.0, 0.0]);
//!
//! let mut clusters =
//!     build_clusters(&partition, &sequences, &priors, IndexPolicy::Strict).unwrap();
//! sort_and_relabel(&mut clusters);
//! assert_eq!(clusters[0].components(), 2);
//! ```

pub mod cli;
pub mod cluster;
pub mod commands;
pub mod motif;
pub mod partition;
pub mod report;
pub mod utils;

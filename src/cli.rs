use crate::utils::{Background, IndexPolicy, Result};
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="tfmotif",
          author="tfmotif developers",
          version=&**FULL_VERSION,
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) 2011-{}
This program comes with ABSOLUTELY NO WARRANTY. It is free software,
distributed under the terms of the GNU General Public License.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Build, rank and report motif clusters of a sampled partition")]
    Cluster(ClusterArgs),
    #[clap(about = "Check a partition file for grammar errors")]
    Validate(ValidateArgs),
    #[clap(about = "Scan sequences with the ranked cluster PWMs")]
    Scan(ScanArgs),
    #[clap(about = "Compare cluster motifs across relative offsets")]
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "partitions")]
    #[clap(help = "File with one partition per line")]
    #[clap(value_name = "PARTITIONS")]
    #[arg(value_parser = check_file_exists)]
    pub partitions_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 's')]
    #[clap(long = "sequences")]
    #[clap(help = "Soft nucleotide counts of the aligned sequences")]
    #[clap(value_name = "SEQUENCES")]
    #[arg(value_parser = check_file_exists)]
    pub sequences_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'a')]
    #[clap(long = "priors")]
    #[clap(help = "Baseline prior pseudocounts per model name")]
    #[clap(value_name = "PRIORS")]
    #[arg(value_parser = check_file_exists)]
    pub priors_path: PathBuf,

    #[clap(long = "background")]
    #[clap(short = 'b')]
    #[clap(value_name = "G,A,T,C")]
    #[clap(help = "Background nucleotide frequencies")]
    #[clap(default_value = "0.2,0.3,0.3,0.2")]
    #[arg(value_parser = background_from_string)]
    pub background: Background,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "partition-index")]
    #[clap(value_name = "INDEX")]
    #[clap(help = "0-based partition to analyze [default: last]")]
    pub partition_index: Option<usize>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "index-policy")]
    #[clap(value_name = "POLICY")]
    #[clap(help = "Handling of sites reaching past a sequence end (strict or lenient)")]
    #[clap(default_value = "strict")]
    pub index_policy: IndexPolicy,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("cluster")))]
#[command(arg_required_else_help(true))]
pub struct ClusterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Report path [default: stdout]")]
    #[clap(value_name = "REPORT")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<String>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("validate")))]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "partitions")]
    #[clap(help = "File with one partition per line")]
    #[clap(value_name = "PARTITIONS")]
    #[arg(value_parser = check_file_exists)]
    pub partitions_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("scan")))]
#[command(arg_required_else_help(true))]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "targets")]
    #[clap(help = "FASTA file with the sequences to scan")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub targets_path: PathBuf,

    #[clap(long = "threshold")]
    #[clap(value_name = "BITS")]
    #[clap(help = "Report windows scoring above this many bits")]
    #[clap(default_value = "0.0")]
    pub threshold: f64,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("compare")))]
#[command(arg_required_else_help(true))]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[clap(long = "max-shift")]
    #[clap(value_name = "COLUMNS")]
    #[clap(help = "Largest relative offset to try")]
    #[clap(default_value = "3")]
    pub max_shift: usize,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()).into());
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".to_string().into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()).into())
    } else {
        Ok(path.to_path_buf())
    }
}

fn background_from_string(s: &str) -> Result<Background> {
    s.parse()
}

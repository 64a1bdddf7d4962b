use clap::Parser;
use tfmotif::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{cluster, compare, scan, validate},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Cluster(_) => "cluster",
        Command::Validate(_) => "validate",
        Command::Scan(_) => "scan",
        Command::Compare(_) => "compare",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Cluster(args) => cluster::cluster(args)?,
        Command::Validate(args) => validate::validate(args)?,
        Command::Scan(args) => scan::scan(args)?,
        Command::Compare(args) => compare::compare(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}

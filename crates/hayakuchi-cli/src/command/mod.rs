use clap::{Parser, Subcommand};

use self::{distributions::DistributionsArg, report::ReportArg};

mod distributions;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Tabulate per-show articulation rates
    Report(#[clap(flatten)] ReportArg),
    /// Export per-show rate distributions as JSON
    Distributions(#[clap(flatten)] DistributionsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Distributions(arg) => distributions::run(&arg)?,
    }
    Ok(())
}

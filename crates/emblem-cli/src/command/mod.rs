use clap::{Parser, Subcommand};

use self::{optimize::OptimizeArg, pool::PoolArg};

mod optimize;
mod pool;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Search the best team of ten emblems with a genetic algorithm
    Optimize(#[clap(flatten)] OptimizeArg),
    /// Show the candidate pool and its stat ranges
    Pool(#[clap(flatten)] PoolArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Optimize(arg) => optimize::run(&arg)?,
        Mode::Pool(arg) => pool::run(&arg)?,
    }
    Ok(())
}

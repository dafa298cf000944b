use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pass-tui")]
#[command(about = "Terminal countdown to AOS and LOS of a pass")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the countdown screen (default)
    Run(RunArgs),
    /// Print the current label and duration for the stored timestamps
    Status,
    /// Forget the stored AOS and LOS timestamps
    Clear,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// AOS timestamp, replacing the stored one
    #[arg(long)]
    pub aos: Option<String>,

    /// LOS timestamp, replacing the stored one
    #[arg(long)]
    pub los: Option<String>,

    /// Commit both timestamps on startup
    #[arg(long)]
    pub locked: bool,

    /// Keep timestamps in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Clock tick period in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,
}

impl Cli {
    pub fn run_args(&self) -> RunArgs {
        match &self.command {
            Some(Commands::Run(args)) => args.clone(),
            _ => self.run.clone(),
        }
    }
}

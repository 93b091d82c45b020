use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fivecard",
    version,
    about = "Two-player five-card draw on the command line"
)]
pub struct FivecardCli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a new game and show both starting hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Player one's name
        #[arg(long)]
        p1: Option<String>,
        /// Player two's name
        #[arg(long)]
        p2: Option<String>,
        /// Print the encoded game state instead of the hands
        #[arg(long)]
        json: bool,
    },
    /// Compare two hands, each given as five comma-separated card ids
    Eval { hand1: String, hand2: String },
    /// Play one hot-seat game on this terminal
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        p1: Option<String>,
        #[arg(long)]
        p2: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pubg_application::queries::ResponseKind;
use pubg_domain::Shard;

#[derive(Parser, Debug)]
#[command(name = "pubg-stats")]
#[command(about = "PUBG stats API client", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Platform shard, overrides the configured one
    #[arg(short, long, global = true)]
    pub shard: Option<Shard>,

    /// Save raw response bodies under the data directory
    #[arg(long, global = true)]
    pub save: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write logs to a daily file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// API status
    Status,
    /// One player, by name or account id (defaults from config)
    Player {
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,
        #[arg(long)]
        id: Option<String>,
    },
    /// Several players at once
    Players {
        #[arg(long, value_delimiter = ',', required_unless_present = "ids", conflicts_with = "ids")]
        names: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// One match with its rosters and participants
    Match { id: String },
    /// Seasons of the shard
    Seasons,
    /// Random sample of recent match ids
    Samples,
    /// Telemetry events of a match
    Telemetry {
        match_id: String,
        /// Show the position track and kills of this account
        #[arg(long)]
        account: Option<String>,
        /// Most track points to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Decode a saved response body without network access
    Decode { kind: ResponseKind, file: PathBuf },
}

impl Command {
    pub fn needs_network(&self) -> bool {
        !matches!(self, Command::Decode { .. })
    }
}

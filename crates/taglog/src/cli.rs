//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taglog")]
#[command(version, about = "Create and inspect timestamped per-tag log files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log directory (overrides the config file)
    #[arg(long, env = "TAGLOG_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Config file (.toml, .yaml, .yml or .json)
    #[arg(long, env = "TAGLOG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Program name used in file names instead of this executable's
    #[arg(long, global = true)]
    pub program: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the file and symlink names a log created now would get
    Name {
        /// Tag such as INFO or ERROR
        tag: String,
    },

    /// Create a log file and point the tag's symlink at it
    Create {
        /// Tag such as INFO or ERROR
        tag: String,
    },

    /// Print the newest log file for a tag
    Latest {
        /// Tag such as INFO or ERROR
        tag: String,
    },

    /// Print the last lines of the newest log file for a tag
    Tail {
        /// Tag such as INFO or ERROR
        tag: String,

        /// Number of lines to show
        #[arg(short = 'n', long, default_value = "20")]
        lines: usize,
    },
}

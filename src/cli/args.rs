//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Vampire genealogy queries: seniority, common ancestors, lineage counts
#[derive(Parser, Debug)]
#[command(name = "bloodline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Additional config file (layered over the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, env = "BLOODLINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Closest common ancestor of "c" and "b" in the demonstration coven
    Demo,

    /// Show the coven as a tree
    Tree,

    /// Closest common ancestor of two vampires
    Ancestor {
        /// First vampire
        left: String,
        /// Second vampire
        right: String,
    },

    /// Compare distance from the original
    Seniority {
        /// First vampire
        left: String,
        /// Second vampire
        right: String,
    },

    /// Look up a vampire by name
    Find {
        /// Vampire name
        name: String,
    },

    /// Count offspring and descendants (default: the original)
    Count {
        /// Vampire name
        name: Option<String>,
    },

    /// List descendants turned after a given year
    Millennials {
        /// Conversion year threshold (default from config)
        #[arg(long)]
        after: Option<i32>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show the global config file location
    Path,
}

//! Clap derive structures for the `subnet-explorer` binary.

use crate::processing::Tunnel;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// subnet-explorer -- IPv4 subnet calculator for network engineers
#[derive(Debug, Parser)]
#[command(
    name = "subnet-explorer",
    version,
    about = "Analyze IPv4 subnets and explore neighbouring blocks",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SUBNET_OUTPUT",
        default_value = "terminal",
        global = true
    )]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip the sibling subnet table
    #[arg(long, env = "SUBNET_NO_SIBLINGS", global = true)]
    pub no_siblings: bool,

    /// log4rs configuration file
    #[arg(
        long,
        env = "SUBNET_LOG_CONFIG",
        default_value = "log4rs.yml",
        global = true
    )]
    pub log_config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled panel and sibling table
    Terminal,
    /// Sibling table as CSV
    Csv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze an address with a mask, prefix length or embedded /prefix
    Analyze(AnalyzeArgs),

    /// Wildcard (inverse) mask for a subnet mask or prefix
    Wildcard {
        /// 255.255.255.0, /24, 24 or 10.0.0.0/24
        mask: String,
    },

    /// TCP MSS for an MTU and tunnel encapsulation
    Mss {
        mtu: String,

        #[arg(long, short = 't', default_value = "standard")]
        tunnel: Tunnel,
    },

    /// List dotted masks for /32 through /1
    Masks,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// IPv4 address, optionally with /prefix
    pub address: String,

    /// Dotted mask, /prefix or prefix length
    pub mask: Option<String>,
}

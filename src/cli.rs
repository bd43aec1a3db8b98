//! Command line front end.
//!
//! Each subcommand takes raw strings the way a record form would submit them
//! and returns the rendered text; `main` only prints it.

use crate::config::ENV_FORMAT;
use crate::models::{derive_block, parse_cidr_lenient, SubnetBlock};
use crate::output::{render_blocks, render_conflicts, render_overlap, OutputFormat};
use crate::processing::{find_overlaps, merge, overlaps, split};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "ip-range-ops", version, about = "IPv4 subnet derive, split, merge and overlap checks")]
pub struct Cli {
    /// Output format
    #[arg(long, short, value_enum, env = ENV_FORMAT, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every attribute of the block holding ADDRESS
    Info {
        address: String,
        /// Prefix length as `24`, `/24` or `255.255.255.0`
        mask: String,
    },
    /// Split a block into COUNT (rounded up to a power of two) equal blocks
    Split { cidr: String, count: u64 },
    /// Merge blocks into the fewest aggregated blocks
    Merge {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
    /// Print whether two blocks share any address
    Overlap { first: String, second: String },
    /// List every overlapping pair among the blocks
    Check {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
}

fn parse_all(cidrs: &[String]) -> Result<Vec<SubnetBlock>, Box<dyn Error>> {
    let blocks = cidrs
        .iter()
        .map(|s| parse_cidr_lenient(s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks)
}

/// Execute the parsed command and return what should be printed.
pub fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    log::debug!("run({:?})", cli.command);
    let format = cli.format;

    let text = match cli.command {
        Command::Info { address, mask } => {
            let block = derive_block(&address, &mask)?;
            render_blocks(&[block], format)?
        }
        Command::Split { cidr, count } => {
            let parent = parse_cidr_lenient(&cidr)?;
            let children = split(parent, count)?;
            log::info!("Split {parent} into {} blocks", children.len());
            render_blocks(&children, format)?
        }
        Command::Merge { cidrs } => {
            let merged = merge(&parse_all(&cidrs)?)?;
            log::info!("Merged {} blocks into {}", cidrs.len(), merged.len());
            render_blocks(&merged, format)?
        }
        Command::Overlap { first, second } => {
            let a = parse_cidr_lenient(&first)?;
            let b = parse_cidr_lenient(&second)?;
            render_overlap(&a, &b, overlaps(&a, &b), format)?
        }
        Command::Check { cidrs } => {
            let conflicts = find_overlaps(&parse_all(&cidrs)?);
            if conflicts.is_empty() {
                log::info!("No overlapping blocks found.");
            }
            for (a, b) in &conflicts {
                log::warn!("Block {a} overlaps {b}");
            }
            render_conflicts(&conflicts, format)?
        }
    };
    Ok(text)
}

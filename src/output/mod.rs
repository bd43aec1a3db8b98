//! Output formatting for block records.
//!
//! - [`csv`] - quoted, aligned CSV rows
//! - [`terminal`] - field formatting helpers
//!
//! Rendering returns strings; printing is left to the binary.

mod csv;
mod terminal;

use crate::models::{BlockRecord, SubnetBlock};
use clap::ValueEnum;
use serde_json::json;

pub use csv::{render_pairs, render_records};
pub use terminal::{format_field, format_row};

/// How command results are written to stdout.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned CSV rows with a header.
    #[default]
    Table,
    /// Pretty printed JSON.
    Json,
}

/// Render blocks as full records.
pub fn render_blocks(blocks: &[SubnetBlock], format: OutputFormat) -> serde_json::Result<String> {
    let records: Vec<BlockRecord> = blocks.iter().map(BlockRecord::from).collect();
    match format {
        OutputFormat::Table => Ok(render_records(&records)),
        OutputFormat::Json => serde_json::to_string_pretty(&records),
    }
}

/// Render the answer to a single overlap query.
pub fn render_overlap(
    a: &SubnetBlock,
    b: &SubnetBlock,
    overlaps: bool,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(overlaps.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "a": a,
            "b": b,
            "overlaps": overlaps,
        })),
    }
}

/// Render a list of overlapping pairs.
pub fn render_conflicts(
    pairs: &[(SubnetBlock, SubnetBlock)],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_pairs(pairs)),
        OutputFormat::Json => serde_json::to_string_pretty(pairs),
    }
}

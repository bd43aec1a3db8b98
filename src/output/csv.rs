//! CSV style rendering of block records.

use super::terminal::format_row;
use crate::models::{BlockRecord, SubnetBlock};

const COLUMNS: [(&str, usize); 9] = [
    ("cidr", 20),
    ("network", 17),
    ("broadcast", 17),
    ("first", 17),
    ("last", 17),
    ("size", 12),
    ("bitmask", 9),
    ("hostmask", 17),
    ("usable_hosts", 14),
];

/// Header row naming every record column.
pub fn header() -> String {
    format_row(
        &COLUMNS
            .iter()
            .map(|(name, width)| (name.to_string(), *width))
            .collect::<Vec<_>>(),
    )
}

/// One row per record, in column order of [`header`].
pub fn record_row(record: &BlockRecord) -> String {
    let values = [
        record.cidr.clone(),
        record.network.clone(),
        record.broadcast.clone(),
        record.first.clone(),
        record.last.clone(),
        record.size.to_string(),
        record.bitmask.to_string(),
        record.hostmask.clone(),
        record.usable_hosts.to_string(),
    ];
    let fields: Vec<(String, usize)> = values
        .into_iter()
        .zip(COLUMNS.iter().map(|(_, width)| *width))
        .collect();
    format_row(&fields)
}

/// Header plus one row per record.
pub fn render_records(records: &[BlockRecord]) -> String {
    let mut lines = vec![header()];
    lines.extend(records.iter().map(record_row));
    lines.join("\n")
}

/// One `"a","b"` row per overlapping pair.
pub fn render_pairs(pairs: &[(SubnetBlock, SubnetBlock)]) -> String {
    let mut lines = vec![format_row(&[
        ("block".to_string(), 20),
        ("overlaps".to_string(), 20),
    ])];
    lines.extend(
        pairs
            .iter()
            .map(|(a, b)| format_row(&[(a.to_string(), 20), (b.to_string(), 20)])),
    );
    lines.join("\n")
}

//! Aggregation of adjacent blocks into larger CIDR ranges.

use crate::error::{Result, SubnetError};
use crate::models::{parse_cidr_lenient, SubnetBlock};

/// Parent of `lower` and `upper` when the two are the aligned halves of it.
///
/// The pair must share a prefix length, `upper` must start right after
/// `lower` ends, and `lower` must be the low half of the parent block.
fn merge_pair(lower: SubnetBlock, upper: SubnetBlock) -> Option<SubnetBlock> {
    if lower.prefix_len() != upper.prefix_len() {
        return None;
    }
    let after = lower.broadcast_bits().checked_add(1)?;
    if upper.base_bits() != after {
        return None;
    }
    let parent = lower.supernet()?;
    parent.contains(&upper).then_some(parent)
}

/// Merge blocks into the smallest set of aggregated blocks, sorted by base.
///
/// Blocks are scanned left to right by base address. Each block is merged
/// with the block before it while the pair forms an aligned parent, so a
/// freshly merged block keeps absorbing its neighbours. Overlapping or
/// duplicate input is kept as is and may leave the result larger than the
/// true minimum.
///
/// # Examples
/// ```
/// use ip_range_ops::models::SubnetBlock;
/// use ip_range_ops::processing::merge;
/// let halves: [SubnetBlock; 2] = ["10.0.0.0/25".parse().unwrap(), "10.0.0.128/25".parse().unwrap()];
/// let merged = merge(&halves).unwrap();
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].to_string(), "10.0.0.0/24");
/// ```
pub fn merge(blocks: &[SubnetBlock]) -> Result<Vec<SubnetBlock>> {
    if blocks.is_empty() {
        return Err(SubnetError::EmptyMergeSet);
    }

    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(|b| b.base_bits());

    let mut merged: Vec<SubnetBlock> = Vec::with_capacity(sorted.len());
    for block in sorted {
        let mut current = block;
        while let Some(&previous) = merged.last() {
            match merge_pair(previous, current) {
                Some(parent) => {
                    log::trace!("merge {previous} + {current} -> {parent}");
                    merged.pop();
                    current = parent;
                }
                None => break,
            }
        }
        merged.push(current);
    }

    log::debug!("merged {} blocks into {}", blocks.len(), merged.len());
    Ok(merged)
}

/// [`merge`] blocks given as `a.b.c.d/n` text; host bits are cleared.
pub fn merge_cidrs<I, S>(cidrs: I) -> Result<Vec<SubnetBlock>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let blocks = cidrs
        .into_iter()
        .map(|s| parse_cidr_lenient(s.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    merge(&blocks)
}

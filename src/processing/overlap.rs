//! Overlap detection between blocks.

use crate::models::SubnetBlock;
use itertools::Itertools;

/// `true` when the two address ranges share at least one address.
pub fn overlaps(a: &SubnetBlock, b: &SubnetBlock) -> bool {
    a.base_bits() <= b.broadcast_bits() && b.base_bits() <= a.broadcast_bits()
}

/// Every overlapping pair in `blocks`, in input order.
///
/// Used to flag conflicting records before they are stored together.
pub fn find_overlaps(blocks: &[SubnetBlock]) -> Vec<(SubnetBlock, SubnetBlock)> {
    let conflicts: Vec<(SubnetBlock, SubnetBlock)> = blocks
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| overlaps(a, b))
        .map(|(a, b)| (*a, *b))
        .collect();

    if !conflicts.is_empty() {
        log::debug!(
            "found {} overlapping pair(s) among {} blocks",
            conflicts.len(),
            blocks.len()
        );
    }
    conflicts
}

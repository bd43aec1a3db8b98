//! Equal-size splitting of a block.
//!
//! A block can only be cut into power-of-two pieces, so a request for `n`
//! children yields `2^ceil(log2 n)` of them.

use crate::error::{Result, SubnetError};
use crate::models::{parse_cidr_lenient, SubnetBlock, MAX_LENGTH};

/// Number of extra prefix bits needed for `count` children, `ceil(log2 count)`.
fn extra_bits(count: u64) -> u32 {
    if count <= 1 {
        0
    } else {
        u64::BITS - (count - 1).leading_zeros()
    }
}

/// Split `parent` into the smallest power-of-two number of equal children
/// that is at least `desired_count`, in ascending order.
///
/// # Examples
/// ```
/// use ip_range_ops::models::derive_block;
/// use ip_range_ops::processing::split;
/// let children = split(derive_block("10.0.0.0", "/24").unwrap(), 3).unwrap();
/// assert_eq!(children.len(), 4);
/// assert_eq!(children[1].to_string(), "10.0.0.64/26");
/// ```
pub fn split(parent: SubnetBlock, desired_count: u64) -> Result<Vec<SubnetBlock>> {
    if desired_count < 1 {
        return Err(SubnetError::InvalidSplitCount(desired_count));
    }
    let extra = extra_bits(desired_count);
    let child_prefix = parent.prefix_len() as u32 + extra;
    if child_prefix > MAX_LENGTH as u32 {
        return Err(SubnetError::SplitExceedsAddressSpace {
            prefix_len: parent.prefix_len(),
            count: desired_count,
        });
    }
    let child_prefix = child_prefix as u8;
    let child_size = 1u64 << (MAX_LENGTH - child_prefix);
    let count = 1u64 << extra;
    log::debug!("split {parent} into {count} x /{child_prefix} (requested {desired_count})");

    let start = parent.base_bits() as u64;
    let children = (0..count)
        .map(|i| SubnetBlock::from_parts((start + i * child_size) as u32, child_prefix))
        .collect();
    Ok(children)
}

/// [`split`] a block given as `a.b.c.d/n` text; host bits are cleared.
pub fn split_cidr(parent_cidr: &str, desired_count: u64) -> Result<Vec<SubnetBlock>> {
    split(parse_cidr_lenient(parent_cidr)?, desired_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(s: &str) -> SubnetBlock {
        s.parse().unwrap()
    }

    #[test]
    fn test_extra_bits() {
        assert_eq!(extra_bits(1), 0);
        assert_eq!(extra_bits(2), 1);
        assert_eq!(extra_bits(3), 2);
        assert_eq!(extra_bits(4), 2);
        assert_eq!(extra_bits(5), 3);
        assert_eq!(extra_bits(1 << 32), 32);
        assert_eq!(extra_bits((1 << 32) + 1), 33);
        assert_eq!(extra_bits(u64::MAX), 64);
    }

    #[test]
    fn test_split_into_four() {
        let children = split(block("10.0.0.0/24"), 4).unwrap();
        let cidrs: Vec<String> = children.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            cidrs,
            vec![
                "10.0.0.0/26",
                "10.0.0.64/26",
                "10.0.0.128/26",
                "10.0.0.192/26"
            ]
        );
    }

    #[test]
    fn test_split_rounds_up_to_power_of_two() {
        let parent = block("192.168.0.0/16");
        let children = split(parent, 5).unwrap();
        assert_eq!(children.len(), 8);
        assert!(children.iter().all(|c| c.prefix_len() == 19));
        assert_eq!(children[0].base(), parent.base());
        assert_eq!(children[7].broadcast(), parent.broadcast());
    }

    #[test]
    fn test_split_one_is_identity() {
        let parent = block("10.1.2.0/23");
        assert_eq!(split(parent, 1).unwrap(), vec![parent]);
        let all = block("0.0.0.0/0");
        assert_eq!(split(all, 1).unwrap(), vec![all]);
    }

    #[test]
    fn test_split_to_host_routes() {
        let children = split(block("10.0.0.252/30"), 4).unwrap();
        assert_eq!(children.len(), 4);
        assert!(children.iter().all(|c| c.size() == 1));
        assert_eq!(children[3].to_string(), "10.0.0.255/32");
    }

    #[test]
    fn test_split_top_of_address_space() {
        let children = split(block("255.255.255.0/24"), 2).unwrap();
        assert_eq!(children[1].to_string(), "255.255.255.128/25");
        assert_eq!(children[1].broadcast().to_string(), "255.255.255.255");
    }

    #[test]
    fn test_split_errors() {
        assert_eq!(
            split(block("10.0.0.0/24"), 0),
            Err(SubnetError::InvalidSplitCount(0))
        );
        assert_eq!(
            split(block("10.0.0.0/30"), 5),
            Err(SubnetError::SplitExceedsAddressSpace {
                prefix_len: 30,
                count: 5
            })
        );
        assert!(split(block("10.0.0.1/32"), 2).is_err());
        assert!(split(block("0.0.0.0/0"), u64::MAX).is_err());
    }

    #[test]
    fn test_split_cidr_text() {
        let children = split_cidr("10.0.0.77/24", 2).unwrap();
        assert_eq!(children, vec![block("10.0.0.0/25"), block("10.0.0.128/25")]);
        assert!(split_cidr("10.0.0/24", 2).is_err());
    }
}

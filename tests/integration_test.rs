//! Integration tests for ip-range-ops
//!
//! These tests drive the public API the way a record store would: raw strings
//! in, blocks and records out.

use ip_range_ops::models::{format_addr, from_u32, parse_addr, to_u32};
use ip_range_ops::processing::{merge, merge_cidrs, overlaps, split, split_cidr};
use ip_range_ops::{derive_block, BlockRecord, SubnetBlock, SubnetError};
use proptest::prelude::*;

fn block(s: &str) -> SubnetBlock {
    s.parse().unwrap()
}

#[test]
fn test_derive_scenario() {
    let b = derive_block("192.168.1.10", "/24").unwrap();
    assert_eq!(b.base().to_string(), "192.168.1.0");
    assert_eq!(b.broadcast().to_string(), "192.168.1.255");
    assert_eq!(b.size(), 256);
    assert_eq!(b.usable_hosts(), 254);
}

#[test]
fn test_split_scenario() {
    let children = split(derive_block("10.0.0.0", "/24").unwrap(), 4).unwrap();
    let bases: Vec<String> = children.iter().map(|c| c.base().to_string()).collect();
    assert_eq!(bases, vec!["10.0.0.0", "10.0.0.64", "10.0.0.128", "10.0.0.192"]);
    assert!(children.iter().all(|c| c.prefix_len() == 26));
}

#[test]
fn test_merge_scenarios() {
    assert_eq!(
        merge(&[block("10.0.0.0/25"), block("10.0.0.128/25")]).unwrap(),
        vec![block("10.0.0.0/24")]
    );
    let apart = vec![block("10.0.0.0/25"), block("10.0.1.0/25")];
    assert_eq!(merge(&apart).unwrap(), apart);
}

#[test]
fn test_overlap_scenarios() {
    assert!(overlaps(&block("10.0.0.0/24"), &block("10.0.0.128/25")));
    assert!(!overlaps(&block("10.0.0.0/25"), &block("10.0.1.0/25")));
}

#[test]
fn test_split_then_store_records() {
    // split a stored record into children and persist each child record
    let children = split_cidr("172.16.5.0/24", 3).unwrap();
    let records: Vec<BlockRecord> = children.iter().map(BlockRecord::from).collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[3].network, "172.16.5.192");
    assert_eq!(records[3].broadcast, "172.16.5.255");
    assert_eq!(records[3].bitmask, 26);
    assert_eq!(records[3].size, 64);

    let merged = merge_cidrs(records.iter().map(|r| r.cidr.as_str())).unwrap();
    assert_eq!(merged, vec![block("172.16.5.0/24")]);
}

#[test]
fn test_error_kinds() {
    assert!(matches!(
        derive_block("1.2.3", "24"),
        Err(SubnetError::InvalidAddressFormat(_))
    ));
    assert!(matches!(
        derive_block("1.2.3.4", "/33"),
        Err(SubnetError::InvalidPrefixLength(_))
    ));
    assert_eq!(
        split(block("10.0.0.0/8"), 0),
        Err(SubnetError::InvalidSplitCount(0))
    );
    assert!(matches!(
        split(block("10.0.0.0/28"), 17),
        Err(SubnetError::SplitExceedsAddressSpace { .. })
    ));
    assert_eq!(merge(&[]), Err(SubnetError::EmptyMergeSet));
}

fn any_block() -> impl Strategy<Value = SubnetBlock> {
    (any::<u32>(), 0u8..=32)
        .prop_map(|(bits, len)| SubnetBlock::aligned(from_u32(bits), len).unwrap())
}

proptest! {
    #[test]
    fn prop_address_round_trip(octets in any::<[u8; 4]>()) {
        let text = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        let addr = parse_addr(&text).unwrap();
        prop_assert_eq!(format_addr(addr), text);
        prop_assert_eq!(from_u32(to_u32(addr)), addr);
    }

    #[test]
    fn prop_derived_size(bits in any::<u32>(), len in 0u8..=32) {
        let b = derive_block(&from_u32(bits).to_string(), &len.to_string()).unwrap();
        prop_assert_eq!(b.size(), 1u64 << (32 - len));
        prop_assert_eq!(
            (to_u32(b.broadcast()) - to_u32(b.base())) as u64,
            b.size() - 1
        );
        prop_assert!(b.contains_addr(from_u32(bits)));
    }

    #[test]
    fn prop_split_tiles_parent(parent in any_block(), count in 1u64..=64) {
        let extra = (count as f64).log2().ceil() as u32;
        match split(parent, count) {
            Ok(children) => {
                prop_assert_eq!(children.len() as u64, 1u64 << extra);
                prop_assert_eq!(children[0].base(), parent.base());
                prop_assert_eq!(children[children.len() - 1].broadcast(), parent.broadcast());
                for pair in children.windows(2) {
                    prop_assert_eq!(
                        to_u32(pair[0].broadcast()) as u64 + 1,
                        to_u32(pair[1].base()) as u64
                    );
                }
            }
            Err(e) => {
                prop_assert!(parent.prefix_len() as u32 + extra > 32);
                let is_exceeds = matches!(e, SubnetError::SplitExceedsAddressSpace { .. });
                prop_assert!(is_exceeds);
            }
        }
    }

    #[test]
    fn prop_merge_undoes_split(parent in any_block(), extra in 0u32..=6) {
        prop_assume!(parent.prefix_len() as u32 + extra <= 32);
        let children = split(parent, 1u64 << extra).unwrap();
        prop_assert_eq!(merge(&children).unwrap(), vec![parent]);
    }

    #[test]
    fn prop_merge_idempotent(blocks in prop::collection::vec(any_block(), 1..12)) {
        let once = merge(&blocks).unwrap();
        let twice = merge(&once).unwrap();
        prop_assert_eq!(&twice, &once);
        for pair in once.windows(2) {
            prop_assert!(to_u32(pair[0].base()) <= to_u32(pair[1].base()));
        }
    }

    #[test]
    fn prop_merge_keeps_coverage(first in any_block(), extra in 1u32..=4, keep in any::<u16>()) {
        // a random subset of one parent's children covers the same addresses before and after
        prop_assume!(first.prefix_len() as u32 + extra <= 32);
        let children = split(first, 1u64 << extra).unwrap();
        let subset: Vec<SubnetBlock> = children
            .iter()
            .enumerate()
            .filter(|(i, _)| keep & (1u16 << *i) != 0)
            .map(|(_, b)| *b)
            .collect();
        prop_assume!(!subset.is_empty());
        let merged = merge(&subset).unwrap();
        let total = |bs: &[SubnetBlock]| bs.iter().map(|b| b.size()).sum::<u64>();
        prop_assert_eq!(total(&merged), total(&subset));
        for child in &subset {
            prop_assert!(merged.iter().any(|m| m.contains(child)));
        }
    }

    #[test]
    fn prop_overlap_symmetric(a in any_block(), b in any_block()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        prop_assert!(overlaps(&a, &a));
    }
}

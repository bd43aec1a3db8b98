//! Subnet arithmetic over [`SubnetBlock`](crate::models::SubnetBlock) values:
//! - [`split`] - equal-size splitting
//! - [`merge`] - aggregation of adjacent blocks
//! - [`overlaps`] - range intersection

mod merge;
mod overlap;
mod split;

// Re-export public functions
pub use merge::{merge, merge_cidrs};
pub use overlap::{find_overlaps, overlaps};
pub use split::{split, split_cidr};

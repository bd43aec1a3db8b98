//! Error types for subnet arithmetic.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SubnetError>;

/// Every way an address, block, split or merge request can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid IPv4 address format: '{0}'")]
    InvalidAddressFormat(String),

    #[error("Invalid prefix length: '{0}' (expected 0-32, /0-/32 or a dotted netmask)")]
    InvalidPrefixLength(String),

    #[error("Invalid split count {0}: must be at least 1")]
    InvalidSplitCount(u64),

    #[error("Splitting /{prefix_len} into {count} blocks needs a prefix longer than /32")]
    SplitExceedsAddressSpace { prefix_len: u8, count: u64 },

    #[error("Cannot merge an empty set of blocks")]
    EmptyMergeSet,

    #[error("Block {0} has host bits set, network address is {1}")]
    NonCanonicalBlock(String, String),
}

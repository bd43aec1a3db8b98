//! Value types for IPv4 subnet arithmetic.
//!
//! - [`ipv4`] - dotted-decimal codec and mask helpers
//! - [`SubnetBlock`] - canonical CIDR block with derived attributes
//! - [`BlockRecord`] - serializable record of a block

mod block;
mod ipv4;
mod record;

// Re-export public types
pub use block::{derive_block, is_valid_cidr, parse_cidr_lenient, parse_prefix, SubnetBlock};
pub use ipv4::{
    broadcast_addr, cut_addr, format_addr, from_u32, get_cidr_mask, get_host_mask, is_valid_addr,
    lo_mask, mask_to_prefix, parse_addr, to_u32, MAX_LENGTH,
};
pub use record::BlockRecord;

//! Serializable block record handed to the persistence layer.

use super::SubnetBlock;
use serde::{Deserialize, Serialize};

/// Every derived attribute of a [`SubnetBlock`], as stored by callers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    /// Block in `a.b.c.d/n` form.
    pub cidr: String,
    /// Network (base) address.
    pub network: String,
    /// Broadcast address.
    pub broadcast: String,
    /// First assignable host.
    pub first: String,
    /// Last assignable host.
    pub last: String,
    /// Total number of addresses.
    pub size: u64,
    /// Prefix length.
    pub bitmask: u8,
    /// Host bits as a dotted address, e.g. `0.0.0.255`.
    pub hostmask: String,
    pub usable_hosts: u64,
}

impl From<&SubnetBlock> for BlockRecord {
    fn from(block: &SubnetBlock) -> Self {
        BlockRecord {
            cidr: block.to_string(),
            network: block.base().to_string(),
            broadcast: block.broadcast().to_string(),
            first: block.first_usable().to_string(),
            last: block.last_usable().to_string(),
            size: block.size(),
            bitmask: block.prefix_len(),
            hostmask: block.hostmask().to_string(),
            usable_hosts: block.usable_hosts(),
        }
    }
}

impl From<SubnetBlock> for BlockRecord {
    fn from(block: SubnetBlock) -> Self {
        BlockRecord::from(&block)
    }
}

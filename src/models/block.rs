//! CIDR block value type.
//!
//! A [`SubnetBlock`] is always canonical: its base address has every host bit
//! cleared. Everything else (broadcast, size, usable range) is derived on read.

use super::ipv4::{
    from_u32, get_cidr_mask, mask_to_prefix, parse_addr, to_u32, MAX_LENGTH,
};
use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 network address with its prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubnetBlock {
    base: Ipv4Addr,
    prefix_len: u8,
}

/// Normalize `"24"`, `"/24"` or `"255.255.255.0"` to a prefix length.
pub fn parse_prefix(text: &str) -> Result<u8> {
    let invalid = || SubnetError::InvalidPrefixLength(text.to_string());
    let bare = text.strip_prefix('/').unwrap_or(text);

    if bare.contains('.') {
        let mask = parse_addr(bare).map_err(|_| invalid())?;
        return mask_to_prefix(to_u32(mask)).ok_or_else(invalid);
    }

    if bare.is_empty() || !bare.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Digits only, so a parse failure can only be overflow.
    let len: u32 = bare.parse().map_err(|_| invalid())?;
    if len > MAX_LENGTH as u32 {
        return Err(invalid());
    }
    Ok(len as u8)
}

/// Derive a block from an address and a prefix, clearing host bits.
///
/// # Examples
/// ```
/// use ip_range_ops::models::derive_block;
/// let block = derive_block("192.168.1.10", "/24").unwrap();
/// assert_eq!(block.to_string(), "192.168.1.0/24");
/// assert_eq!(block.usable_hosts(), 254);
/// ```
pub fn derive_block(address_text: &str, prefix_or_mask_text: &str) -> Result<SubnetBlock> {
    let prefix_len = parse_prefix(prefix_or_mask_text)?;
    let addr = parse_addr(address_text)?;
    let block = SubnetBlock::aligned(addr, prefix_len)?;
    log::trace!("derive_block({address_text}, {prefix_or_mask_text}) = {block}");
    Ok(block)
}

/// Parse `a.b.c.d/n` text, clearing host bits instead of rejecting them.
pub fn parse_cidr_lenient(text: &str) -> Result<SubnetBlock> {
    let (addr, prefix) = split_cidr_text(text)?;
    derive_block(addr, prefix)
}

/// `true` when the text is a canonical `a.b.c.d/n` block.
pub fn is_valid_cidr(text: &str) -> bool {
    text.parse::<SubnetBlock>().is_ok()
}

fn split_cidr_text(text: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return Err(SubnetError::InvalidPrefixLength(text.to_string()));
    }
    Ok((parts[0], parts[1]))
}

impl SubnetBlock {
    /// Strict constructor: `base` must already be the network address.
    pub fn new(base: Ipv4Addr, prefix_len: u8) -> Result<SubnetBlock> {
        let mask = get_cidr_mask(prefix_len)?;
        let network = from_u32(to_u32(base) & mask);
        if network != base {
            return Err(SubnetError::NonCanonicalBlock(
                format!("{base}/{prefix_len}"),
                network.to_string(),
            ));
        }
        Ok(SubnetBlock { base, prefix_len })
    }

    /// Build the block containing `addr`, clearing its host bits.
    pub fn aligned(addr: Ipv4Addr, prefix_len: u8) -> Result<SubnetBlock> {
        let mask = get_cidr_mask(prefix_len)?;
        Ok(SubnetBlock {
            base: from_u32(to_u32(addr) & mask),
            prefix_len,
        })
    }

    /// Build from raw parts already known to be canonical.
    pub(crate) fn from_parts(base: u32, prefix_len: u8) -> SubnetBlock {
        debug_assert!(prefix_len <= MAX_LENGTH);
        debug_assert_eq!(base & !mask_bits(prefix_len), 0);
        SubnetBlock {
            base: from_u32(base),
            prefix_len,
        }
    }

    /// Network address.
    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub(crate) fn base_bits(&self) -> u32 {
        to_u32(self.base)
    }

    pub(crate) fn host_bits(&self) -> u32 {
        !mask_bits(self.prefix_len)
    }

    pub(crate) fn broadcast_bits(&self) -> u32 {
        self.base_bits() | self.host_bits()
    }

    pub fn netmask(&self) -> Ipv4Addr {
        from_u32(mask_bits(self.prefix_len))
    }

    pub fn hostmask(&self) -> Ipv4Addr {
        from_u32(self.host_bits())
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        from_u32(self.broadcast_bits())
    }

    /// Number of addresses, `2^(32-prefix_len)`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_len)
    }

    /// Number of assignable hosts, network and broadcast excluded.
    pub fn usable_hosts(&self) -> u64 {
        self.size().saturating_sub(2)
    }

    /// First assignable address; the base itself for /31 and /32.
    pub fn first_usable(&self) -> Ipv4Addr {
        if self.size() > 2 {
            from_u32(self.base_bits() + 1)
        } else {
            self.base
        }
    }

    /// Last assignable address; the broadcast itself for /31 and /32.
    pub fn last_usable(&self) -> Ipv4Addr {
        if self.size() > 2 {
            from_u32(self.broadcast_bits() - 1)
        } else {
            self.broadcast()
        }
    }

    pub fn contains_addr(&self, addr: Ipv4Addr) -> bool {
        let bits = to_u32(addr);
        self.base_bits() <= bits && bits <= self.broadcast_bits()
    }

    /// `true` when `other` lies entirely inside this block.
    pub fn contains(&self, other: &SubnetBlock) -> bool {
        self.base_bits() <= other.base_bits() && other.broadcast_bits() <= self.broadcast_bits()
    }

    /// Equally sized block directly after this one.
    pub fn next_block(&self) -> Option<SubnetBlock> {
        let next = self.broadcast_bits().checked_add(1)?;
        Some(SubnetBlock::from_parts(next, self.prefix_len))
    }

    /// Enclosing block one bit shorter, `None` for /0.
    pub fn supernet(&self) -> Option<SubnetBlock> {
        let prefix_len = self.prefix_len.checked_sub(1)?;
        Some(SubnetBlock::from_parts(
            self.base_bits() & mask_bits(prefix_len),
            prefix_len,
        ))
    }
}

// Callers guarantee len <= MAX_LENGTH.
fn mask_bits(len: u8) -> u32 {
    get_cidr_mask(len).unwrap_or(u32::MAX)
}

impl fmt::Display for SubnetBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl FromStr for SubnetBlock {
    type Err = SubnetError;

    /// Strict `a.b.c.d/n` parse; host bits must be clear.
    fn from_str(s: &str) -> Result<SubnetBlock> {
        let (addr, prefix) = split_cidr_text(s)?;
        let base = parse_addr(addr)?;
        let prefix_len = parse_prefix(prefix)?;
        SubnetBlock::new(base, prefix_len)
    }
}

impl Serialize for SubnetBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SubnetBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<SubnetBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

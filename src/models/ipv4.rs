//! Dotted-decimal IPv4 codec and mask arithmetic.
//!
//! Addresses are carried as [`Ipv4Addr`] and converted to `u32` (first octet
//! most significant) for all bit arithmetic.

use crate::error::{Result, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Parse a dotted-decimal IPv4 address.
///
/// Exactly four decimal octets in `0..=255` are required. Leading zeros are
/// read as decimal (`010` is ten), surrounding whitespace is rejected.
///
/// # Examples
/// ```
/// use ip_range_ops::models::parse_addr;
/// assert_eq!(parse_addr("192.168.1.10").unwrap().octets(), [192, 168, 1, 10]);
/// assert!(parse_addr("192.168.1").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<Ipv4Addr> {
    let invalid = || SubnetError::InvalidAddressFormat(text.to_string());
    let caps = DOTTED_QUAD.captures(text).ok_or_else(invalid)?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let value: u16 = caps[i + 1].parse().map_err(|_| invalid())?;
        *octet = u8::try_from(value).map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Canonical dotted-decimal text, no leading zeros.
pub fn format_addr(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// `true` when [`parse_addr`] accepts the text.
pub fn is_valid_addr(text: &str) -> bool {
    parse_addr(text).is_ok()
}

pub fn to_u32(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

pub fn from_u32(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_range_ops::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixLength(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Host bits of a prefix length, `2^(32-len) - 1`.
pub fn get_host_mask(len: u8) -> Result<u32> {
    Ok(!get_cidr_mask(len)?)
}

/// Prefix length of a contiguous netmask, `None` if the ones are not contiguous.
pub fn mask_to_prefix(mask: u32) -> Option<u8> {
    let len = mask.leading_ones() as u8;
    if get_cidr_mask(len).ok()? == mask {
        Some(len)
    } else {
        None
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(from_u32(to_u32(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = to_u32(addr) & mask;
    Ok(from_u32(network_bits | !mask))
}

/// Smallest prefix length for which `ip` is a valid network address.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = to_u32(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

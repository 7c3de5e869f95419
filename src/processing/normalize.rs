//! Input normalizer.
//!
//! Turns the two text boxes of the calculator (address, mask) into an
//! [`Ipv4Cidr`]. The mask box takes `/30`, `30`, `255.255.255.252`, or
//! nothing at all when the address already reads `a.b.c.d/30`.

use super::analyze::analyze;
use crate::error::SubnetError;
use crate::models::{parse_dotted, prefix_from_mask, Ipv4Cidr, NetworkDescriptor, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PREFIX_LEN: Regex = Regex::new(r"^/?([0-9]+)$").expect("Invalid Regex?");
}

/// Parse a prefix length (`/30`, `30`) or a dotted mask into a prefix length.
///
/// Prefix digits may carry leading zeros (`/030`); the value must be 0-32.
pub fn parse_mask(mask_text: &str) -> Result<u8, SubnetError> {
    let text = mask_text.trim();
    let invalid = || SubnetError::InvalidMask(text.to_string());

    if let Some(caps) = PREFIX_LEN.captures(text) {
        let len: u8 = caps[1].parse().map_err(|_| invalid())?;
        if len > MAX_LENGTH {
            return Err(invalid());
        }
        return Ok(len);
    }

    let mask = parse_dotted(text).ok_or_else(invalid)?;
    prefix_from_mask(u32::from(mask)).ok_or_else(invalid)
}

/// Validate the address and mask text into an [`Ipv4Cidr`].
///
/// An empty mask with no embedded `/prefix` is a host route (/32).
pub fn parse_input(address_text: &str, mask_text: &str) -> Result<Ipv4Cidr, SubnetError> {
    let address = address_text.trim();
    let mask = mask_text.trim();

    let (addr, mask) = match address.split_once('/') {
        Some(_) if !mask.is_empty() => {
            return Err(SubnetError::InvalidAddress(address.to_string()));
        }
        Some((addr, embedded)) => (addr, Some(embedded)),
        None if mask.is_empty() => (address, None),
        None => (address, Some(mask)),
    };
    let addr = parse_dotted(addr).ok_or_else(|| SubnetError::InvalidAddress(address.to_string()))?;
    let prefix = match mask {
        Some(mask) => parse_mask(mask)?,
        None => MAX_LENGTH,
    };

    Ipv4Cidr::new(addr, prefix)
}

/// Validate the inputs and run the calculator on them.
pub fn normalize(address_text: &str, mask_text: &str) -> Result<NetworkDescriptor, SubnetError> {
    let input = parse_input(address_text, mask_text).map_err(|e| {
        log::debug!("normalize({address_text:?}, {mask_text:?}) rejected: {e}");
        e
    })?;
    Ok(analyze(input))
}

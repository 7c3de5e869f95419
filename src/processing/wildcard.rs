//! Wildcard (inverse) mask calculator, as used in ACLs and OSPF area statements.

use super::normalize::parse_mask;
use crate::error::SubnetError;
use crate::models::get_cidr_mask;
use serde::Serialize;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WildcardMask {
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
}

/// Wildcard for a dotted mask, `/N`, `N`, or `a.b.c.d/N`.
///
/// For the last form only the prefix is used.
pub fn wildcard(mask_text: &str) -> Result<WildcardMask, SubnetError> {
    let text = mask_text.trim();
    let prefix = match text.rsplit_once('/') {
        Some((addr, prefix)) if !addr.is_empty() => parse_mask(prefix)?,
        _ => parse_mask(text)?,
    };
    let mask = get_cidr_mask(prefix);
    Ok(WildcardMask {
        mask: Ipv4Addr::from(mask),
        wildcard: Ipv4Addr::from(!mask),
    })
}

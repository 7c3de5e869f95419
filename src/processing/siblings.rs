//! Sibling subnet enumeration.
//!
//! Lists every block of the analyzed size inside its natural parent
//! (/24, /16 or /8), the "all possible /N networks for a.b.c.*" view.

use super::analyze::usable_range;
use crate::models::{ip_after_subnet, Ipv4Cidr, NetworkDescriptor, SiblingSubnet, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Upper bound on rows produced for one parent block.
pub const SIBLING_LIMIT: usize = 256;

/// Natural parent prefix for a block. Returns `prefix` itself above a /8.
pub fn parent_prefix(prefix: u8) -> u8 {
    match prefix {
        24..=u8::MAX => 24,
        16..=23 => 16,
        8..=15 => 8,
        _ => prefix,
    }
}

/// Ascending iterator over same-size subnets of a parent block.
///
/// A clone replays the remaining rows; call [`siblings`] again to start over.
#[derive(Debug, Clone)]
pub struct Siblings {
    parent: Ipv4Cidr,
    prefix: u8,
    current: Ipv4Addr,
    next: Option<Ipv4Addr>,
    remaining: usize,
}

impl Siblings {
    fn empty(address: Ipv4Addr, prefix: u8) -> Siblings {
        Siblings {
            parent: Ipv4Cidr::clamped(address, prefix),
            prefix,
            current: address,
            next: None,
            remaining: 0,
        }
    }
}

impl Iterator for Siblings {
    type Item = SiblingSubnet;

    fn next(&mut self) -> Option<SiblingSubnet> {
        if self.remaining == 0 {
            return None;
        }
        let network = self.next.filter(|n| self.parent.contains(*n))?;
        self.remaining -= 1;
        self.next = ip_after_subnet(network, self.prefix);

        let block = Ipv4Cidr::clamped(network, self.prefix);
        let broadcast = block.hi();
        Some(SiblingSubnet {
            network,
            usable_range: usable_range(network, broadcast, self.prefix),
            broadcast,
            current: block.contains(self.current),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_none() {
            (0, Some(0))
        } else {
            (0, Some(self.remaining))
        }
    }
}

/// Enumerate the `/prefix` blocks of `parent`, flagging the one holding `address`.
///
/// Stops after [`SIBLING_LIMIT`] rows. A `prefix` not longer than the
/// parent's, or longer than /32, yields nothing.
pub fn subnets_within(parent: Ipv4Cidr, prefix: u8, address: Ipv4Addr) -> Siblings {
    if prefix <= parent.prefix() || prefix > MAX_LENGTH {
        return Siblings::empty(address, prefix);
    }
    Siblings {
        parent,
        prefix,
        current: address,
        next: Some(parent.lo()),
        remaining: SIBLING_LIMIT,
    }
}

/// Sibling rows for an analyzed network, ascending by network address.
pub fn siblings(descriptor: &NetworkDescriptor) -> Siblings {
    let prefix = descriptor.prefix_length;
    let parent = Ipv4Cidr::clamped(descriptor.address, parent_prefix(prefix));
    log::debug!("siblings(/{prefix}) parent={}/{}", parent.lo(), parent.prefix());
    subnets_within(parent, prefix, descriptor.address)
}

//! Core subnet calculator.
//!
//! Pure bitwise arithmetic over the `u32` form of the address. Input is an
//! already validated [`Ipv4Cidr`], so nothing in here can fail.

use super::render;
use crate::models::{AddressClass, IpType, Ipv4Cidr, NetworkDescriptor, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Assignable host count for a prefix.
///
/// /31 links (RFC 3021) and /32 host routes reserve nothing.
pub fn usable_hosts(prefix: u8) -> u64 {
    match prefix {
        32 => 1,
        31 => 2,
        _ => (1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH))) - 2,
    }
}

/// First and last assignable address of a block.
pub fn usable_range(network: Ipv4Addr, broadcast: Ipv4Addr, prefix: u8) -> (Ipv4Addr, Ipv4Addr) {
    match prefix {
        32 => (network, network),
        31 => (network, broadcast),
        _ => (
            Ipv4Addr::from(u32::from(network) + 1),
            Ipv4Addr::from(u32::from(broadcast) - 1),
        ),
    }
}

/// Derive every field of a [`NetworkDescriptor`].
pub fn analyze(input: Ipv4Cidr) -> NetworkDescriptor {
    let addr = input.addr();
    let prefix = input.prefix();
    let mask = input.mask();
    let bits = u32::from(addr);
    let network = input.lo();
    let broadcast = input.hi();

    log::debug!("analyze({input}) network={network} broadcast={broadcast}");

    NetworkDescriptor {
        address: addr,
        prefix_length: prefix,
        network,
        broadcast,
        netmask: Ipv4Addr::from(mask),
        wildcard: Ipv4Addr::from(!mask),
        total_hosts: input.size(),
        usable_hosts: usable_hosts(prefix),
        usable_range: usable_range(network, broadcast, prefix),
        ip_class: AddressClass::of(addr),
        ip_type: IpType::of(addr),
        integer_id: bits,
        binary_id: render::binary_octets(bits),
        mask_bin: render::binary_octets(mask),
        hex_id: render::hex_id(bits),
        reverse_dns: render::reverse_dns(addr),
        ipv4_mapped: render::ipv4_mapped(bits),
        prefix_6to4: render::prefix_6to4(bits),
    }
}

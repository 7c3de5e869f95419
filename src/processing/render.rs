//! Text renderings of a 32-bit address.

use itertools::Itertools;
use std::net::Ipv4Addr;

/// 32 bits grouped by octet: `11111111.11111111.11111111.00000000`.
pub fn binary_octets(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

pub fn hex_id(bits: u32) -> String {
    format!("0x{bits:08x}")
}

/// `42.128.206.49.in-addr.arpa` for `49.206.128.42`.
pub fn reverse_dns(addr: Ipv4Addr) -> String {
    format!(
        "{}.in-addr.arpa",
        addr.octets().iter().rev().map(u8::to_string).join(".")
    )
}

/// `::ffff:c0a8:0101` for `192.168.1.1`.
pub fn ipv4_mapped(bits: u32) -> String {
    format!("::ffff:{:04x}:{:04x}", bits >> 16, bits & 0xffff)
}

/// `2002:c0a80101::/48` for `192.168.1.1`.
pub fn prefix_6to4(bits: u32) -> String {
    format!("2002:{bits:08x}::/48")
}

//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for an address paired with a prefix length, along
//! with the bitwise helpers the analyzer is built from. All arithmetic is on
//! the big-endian `u32` form of the address.

use crate::error::SubnetError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex = Regex::new(
        r"^(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})$"
    )
    .expect("Invalid Regex?");
}

/// Parse four dot-separated decimal octets, each in `0..=255`.
///
/// Leading zeros (`010.0.0.1`) are rejected: some parsers read them as octal.
pub fn parse_dotted(text: &str) -> Option<Ipv4Addr> {
    let caps = DOTTED_QUAD.captures(text.trim())?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let value: u16 = caps[i + 1].parse().ok()?;
        *octet = u8::try_from(value).ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped to a host mask.
///
/// # Examples
/// ```
/// use subnet_explorer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len) as u32;
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// Prefix length of a contiguous mask, `None` if the one-bits have holes.
pub fn prefix_from_mask(mask: u32) -> Option<u8> {
    let len = mask.leading_ones() as u8;
    if get_cidr_mask(len) == mask {
        Some(len)
    } else {
        None
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Returns the network address following the subnet that contains `addr`.
///
/// `None` once the subnet is the last one in the address space.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let subnet_size = 1u64 << (MAX_LENGTH - len.min(MAX_LENGTH));
    let next = u64::from(u32::from(cut_addr(addr, len))) + subnet_size;
    u32::try_from(next).ok().map(Ipv4Addr::from)
}

/// Dotted masks for `/32` down to `/1`, the order a mask picker lists them.
pub fn mask_catalogue() -> Vec<(u8, Ipv4Addr)> {
    (1..=MAX_LENGTH)
        .rev()
        .map(|len| (len, Ipv4Addr::from(get_cidr_mask(len))))
        .collect()
}

/// IPv4 address with CIDR prefix length.
///
/// The address keeps its host bits; use [`Ipv4Cidr::lo`] for the network.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Cidr {
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Cidr, SubnetError> {
        if prefix > MAX_LENGTH {
            return Err(SubnetError::InvalidMask(format!("/{prefix}")));
        }
        Ok(Ipv4Cidr { addr, prefix })
    }

    /// Crate-internal constructor, clamps `prefix` to [`MAX_LENGTH`].
    pub(crate) fn clamped(addr: Ipv4Addr, prefix: u8) -> Ipv4Cidr {
        Ipv4Cidr {
            addr,
            prefix: prefix.min(MAX_LENGTH),
        }
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        get_cidr_mask(self.prefix)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.prefix)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << MAX_LENGTH.saturating_sub(self.prefix)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        cut_addr(addr, self.prefix) == self.lo()
    }
}

impl FromStr for Ipv4Cidr {
    type Err = SubnetError;

    /// Parse `a.b.c.d/len`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidAddress(s.to_string()))?;
        let addr = parse_dotted(addr).ok_or_else(|| SubnetError::InvalidAddress(s.to_string()))?;
        let prefix: u8 = prefix
            .trim()
            .parse()
            .map_err(|_| SubnetError::InvalidMask(prefix.to_string()))?;
        Ipv4Cidr::new(addr, prefix)
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), 0x00000000);
        assert_eq!(get_cidr_mask(1), 0x80000000);
        assert_eq!(get_cidr_mask(8), 0xFF000000);
        assert_eq!(get_cidr_mask(16), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(30), 0xFFFFFFFC);
        assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(33), 0xFFFFFFFF);
    }

    #[test]
    fn test_prefix_from_mask() {
        assert_eq!(prefix_from_mask(0xFFFFFF00), Some(24));
        assert_eq!(prefix_from_mask(0xFFFFFFFC), Some(30));
        assert_eq!(prefix_from_mask(0), Some(0));
        assert_eq!(prefix_from_mask(u32::MAX), Some(32));
        // 255.255.0.255
        assert_eq!(prefix_from_mask(0xFFFF00FF), None);
        // 0.0.0.255 is a wildcard, not a mask
        assert_eq!(prefix_from_mask(0x000000FF), None);
    }

    #[test]
    fn test_parse_dotted() {
        assert_eq!(parse_dotted("49.206.128.42"), Some(Ipv4Addr::new(49, 206, 128, 42)));
        assert_eq!(parse_dotted(" 10.0.0.1 "), Some(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(parse_dotted("0.0.0.0"), Some(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(parse_dotted("100.20.3.0"), Some(Ipv4Addr::new(100, 20, 3, 0)));
        assert_eq!(parse_dotted("010.000.000.001"), None);
        assert_eq!(parse_dotted("10.0.0.01"), None);
        assert_eq!(parse_dotted("1.2.3.00"), None);
        assert_eq!(parse_dotted("1.2.3.0255"), None);
        assert_eq!(parse_dotted("256.0.0.1"), None);
        assert_eq!(parse_dotted("1.2.3"), None);
        assert_eq!(parse_dotted("1.2.3.4.5"), None);
        assert_eq!(parse_dotted("1.2.3.-4"), None);
        assert_eq!(parse_dotted("a.b.c.d"), None);
        assert_eq!(parse_dotted(""), None);
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0), Ipv4Addr::new(0, 0, 0, 0));
    }

    #[test]
    fn test_ip_after_subnet() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(ip_after_subnet(ip, 24), Some(Ipv4Addr::new(192, 168, 2, 0)));
        assert_eq!(ip_after_subnet(ip, 16), Some(Ipv4Addr::new(192, 169, 0, 0)));
        assert_eq!(ip_after_subnet(ip, 8), Some(Ipv4Addr::new(193, 0, 0, 0)));
        assert_eq!(ip_after_subnet(ip, 32), Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(ip_after_subnet(Ipv4Addr::new(255, 255, 255, 255), 24), None);
        assert_eq!(ip_after_subnet(ip, 0), None);
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(broadcast_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(broadcast_addr(ip, 16), Ipv4Addr::new(192, 168, 255, 255));
        assert_eq!(broadcast_addr(ip, 8), Ipv4Addr::new(192, 255, 255, 255));
        assert_eq!(broadcast_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast_addr(ip, 0), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_mask_catalogue() {
        let masks = mask_catalogue();
        assert_eq!(masks.len(), 32);
        assert_eq!(masks[0], (32, Ipv4Addr::new(255, 255, 255, 255)));
        assert_eq!(masks[2], (30, Ipv4Addr::new(255, 255, 255, 252)));
        assert_eq!(masks[31], (1, Ipv4Addr::new(128, 0, 0, 0)));
    }

    #[test]
    fn test_ipv4_cidr_from_str() {
        let cidr: Ipv4Cidr = "10.2.3.4/16".parse().unwrap();
        assert_eq!(cidr.addr(), Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(cidr.prefix(), 16);
        assert_eq!(cidr.lo(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(cidr.hi(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(cidr.size(), 65536);
        assert_eq!(cidr.to_string(), "10.2.3.4/16");

        assert_eq!(
            "10.2.3.4/33".parse::<Ipv4Cidr>(),
            Err(SubnetError::InvalidMask("/33".into()))
        );
        assert!(matches!(
            "10.2.3/16".parse::<Ipv4Cidr>(),
            Err(SubnetError::InvalidAddress(_))
        ));
        assert!(matches!(
            "10.2.3.4".parse::<Ipv4Cidr>(),
            Err(SubnetError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_ipv4_cidr_prefix_bounds() {
        let addr = Ipv4Addr::new(1, 2, 3, 4);
        assert_eq!(
            Ipv4Cidr::new(addr, 33),
            Err(SubnetError::InvalidMask("/33".into()))
        );

        let host = Ipv4Cidr::clamped(addr, 200);
        assert_eq!(host.prefix(), 32);
        assert_eq!(host.size(), 1);
        assert_eq!(host.lo(), addr);
        assert_eq!(host.hi(), addr);

        // size() never shifts past the address width
        let wide = Ipv4Cidr { addr, prefix: 33 };
        assert_eq!(wide.size(), 1);
        assert_eq!(wide.mask(), u32::MAX);
    }

    #[test]
    fn test_ipv4_cidr_contains() {
        let cidr: Ipv4Cidr = "10.0.10.0/24".parse().unwrap();
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 200)));
        assert!(!cidr.contains(Ipv4Addr::new(10, 0, 11, 0)));
        let all: Ipv4Cidr = "0.0.0.0/0".parse().unwrap();
        assert!(all.contains(Ipv4Addr::new(255, 1, 2, 3)));
        assert_eq!(all.size(), 1u64 << 32);
    }

    #[test]
    fn test_ipv4_cidr_cmp() {
        let ip1: Ipv4Cidr = "10.0.10.0/24".parse().unwrap();
        let ip2: Ipv4Cidr = "10.0.0.0/8".parse().unwrap();
        let ip3: Ipv4Cidr = "10.0.10.64/26".parse().unwrap();

        assert!(ip1 > ip2);
        assert!(ip1 < ip3);
        assert!(ip2.lo() < ip1.lo());
        assert!(ip2.hi() > ip3.hi());
        assert_eq!(ip2.hi(), Ipv4Addr::new(10, 255, 255, 255));
    }
}

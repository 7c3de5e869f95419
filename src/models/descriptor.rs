//! Fully analyzed network descriptor.

use std::fmt;
use std::net::Ipv4Addr;

/// Classful address class, decided by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// 224-239
    D,
    /// 240-255
    E,
    /// First octet 0 or 127.
    Special,
}

impl AddressClass {
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        match addr.octets()[0] {
            1..=126 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
            _ => AddressClass::Special,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (Multicast)",
            AddressClass::E => "E (Experimental)",
            AddressClass::Special => "Loopback/Special",
        };
        f.write_str(label)
    }
}

/// Public/private classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpType {
    Private,
    Public,
}

impl IpType {
    /// RFC 1918 blocks plus loopback and link-local count as private.
    pub fn of(addr: Ipv4Addr) -> IpType {
        if addr.is_private() || addr.is_loopback() || addr.is_link_local() {
            IpType::Private
        } else {
            IpType::Public
        }
    }
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpType::Private => f.write_str("Private"),
            IpType::Public => f.write_str("Public"),
        }
    }
}

/// Everything derived from one address and prefix length.
///
/// Built by [`crate::processing::analyze`]; plain data with no identity
/// beyond its field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    /// The address as entered, host bits included.
    pub address: Ipv4Addr,
    pub prefix_length: u8,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    /// `2^(32 - prefix_length)`, so /0 needs the full u64.
    pub total_hosts: u64,
    pub usable_hosts: u64,
    /// First and last assignable address.
    pub usable_range: (Ipv4Addr, Ipv4Addr),
    pub ip_class: AddressClass,
    pub ip_type: IpType,
    pub integer_id: u32,
    /// Address bits grouped by octet, `00110001.11001110.10000000.00101010`.
    pub binary_id: String,
    /// Mask bits grouped by octet.
    pub mask_bin: String,
    /// `0x` followed by 8 lowercase hex digits.
    pub hex_id: String,
    pub reverse_dns: String,
    pub ipv4_mapped: String,
    pub prefix_6to4: String,
}

impl NetworkDescriptor {
    /// `/N`
    pub fn cidr(&self) -> String {
        format!("/{}", self.prefix_length)
    }

    /// Usable range as `first - last`.
    pub fn range(&self) -> String {
        format!("{} - {}", self.usable_range.0, self.usable_range.1)
    }

    /// Labeled rows for a metadata panel, in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IP Address:", self.address.to_string()),
            ("Network Address:", self.network.to_string()),
            ("Usable Range:", self.range()),
            ("Broadcast:", self.broadcast.to_string()),
            ("Total Hosts:", self.total_hosts.to_string()),
            ("Usable Hosts:", self.usable_hosts.to_string()),
            ("Subnet Mask:", self.netmask.to_string()),
            ("Wildcard Mask:", self.wildcard.to_string()),
            ("Binary Mask:", self.mask_bin.clone()),
            ("IP Class:", self.ip_class.to_string()),
            ("IP Type:", self.ip_type.to_string()),
            ("CIDR:", self.cidr()),
            ("Hex ID:", self.hex_id.clone()),
            ("Binary ID:", self.binary_id.clone()),
            ("Reverse DNS:", self.reverse_dns.clone()),
            ("mapped IPv6:", self.ipv4_mapped.clone()),
            ("6to4 Prefix:", self.prefix_6to4.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_class() {
        assert_eq!(AddressClass::of(Ipv4Addr::new(8, 8, 8, 8)), AddressClass::A);
        assert_eq!(AddressClass::of(Ipv4Addr::new(126, 0, 0, 1)), AddressClass::A);
        assert_eq!(AddressClass::of(Ipv4Addr::new(127, 0, 0, 1)), AddressClass::Special);
        assert_eq!(AddressClass::of(Ipv4Addr::new(0, 1, 2, 3)), AddressClass::Special);
        assert_eq!(AddressClass::of(Ipv4Addr::new(172, 16, 0, 1)), AddressClass::B);
        assert_eq!(AddressClass::of(Ipv4Addr::new(192, 168, 1, 1)), AddressClass::C);
        assert_eq!(AddressClass::of(Ipv4Addr::new(224, 0, 0, 5)), AddressClass::D);
        assert_eq!(AddressClass::of(Ipv4Addr::new(255, 255, 255, 255)), AddressClass::E);
        assert_eq!(AddressClass::D.to_string(), "D (Multicast)");
        assert_eq!(AddressClass::E.to_string(), "E (Experimental)");
    }

    #[test]
    fn test_ip_type() {
        assert_eq!(IpType::of(Ipv4Addr::new(10, 1, 2, 3)), IpType::Private);
        assert_eq!(IpType::of(Ipv4Addr::new(172, 31, 255, 1)), IpType::Private);
        assert_eq!(IpType::of(Ipv4Addr::new(172, 32, 0, 1)), IpType::Public);
        assert_eq!(IpType::of(Ipv4Addr::new(192, 168, 0, 1)), IpType::Private);
        assert_eq!(IpType::of(Ipv4Addr::new(127, 0, 0, 1)), IpType::Private);
        assert_eq!(IpType::of(Ipv4Addr::new(169, 254, 10, 1)), IpType::Private);
        assert_eq!(IpType::of(Ipv4Addr::new(8, 8, 8, 8)), IpType::Public);
        assert_eq!(IpType::of(Ipv4Addr::new(49, 206, 128, 42)), IpType::Public);
    }
}

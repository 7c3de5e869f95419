//! Domain models for the subnet analyzer.
//!
//! - [`Ipv4Cidr`] - IPv4 address with a prefix length, plus mask helpers
//! - [`NetworkDescriptor`] - everything derived from an address and prefix
//! - [`SiblingSubnet`] - one row of the neighbouring subnet table

mod descriptor;
mod ipv4;
mod sibling;

// Re-export public types
pub use descriptor::{AddressClass, IpType, NetworkDescriptor};
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, ip_after_subnet, mask_catalogue, parse_dotted,
    prefix_from_mask, Ipv4Cidr, MAX_LENGTH,
};
pub use sibling::SiblingSubnet;

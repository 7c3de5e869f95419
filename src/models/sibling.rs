//! One row of the sibling subnet table.

use std::net::Ipv4Addr;

/// A same-size block inside the natural parent (/8, /16 or /24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiblingSubnet {
    pub network: Ipv4Addr,
    pub usable_range: (Ipv4Addr, Ipv4Addr),
    pub broadcast: Ipv4Addr,
    /// The block the analyzed address lives in.
    pub current: bool,
}

impl SiblingSubnet {
    pub fn range(&self) -> String {
        format!("{} - {}", self.usable_range.0, self.usable_range.1)
    }
}

//! TCP MSS clamp calculator.

use crate::error::SubnetError;
use serde::Serialize;
use std::fmt;

/// IPv4 header plus TCP header, no options.
pub const IP_TCP_HEADERS: u32 = 40;

/// Encapsulation between the two TCP endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Tunnel {
    /// Plain IP, no encapsulation
    #[default]
    Standard,
    IpsecTransport,
    IpsecTunnel,
    Gre,
    Vxlan,
    Wireguard,
}

impl Tunnel {
    /// Conservative per-packet overhead in bytes.
    pub fn overhead(self) -> u32 {
        match self {
            Tunnel::Standard => 0,
            Tunnel::IpsecTransport => 56,
            Tunnel::IpsecTunnel => 80,
            Tunnel::Gre => 24,
            Tunnel::Vxlan => 50,
            Tunnel::Wireguard => 60,
        }
    }
}

impl fmt::Display for Tunnel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Tunnel::Standard => "Standard (No Tunnel)",
            Tunnel::IpsecTransport => "IPsec Transport",
            Tunnel::IpsecTunnel => "IPsec Tunnel",
            Tunnel::Gre => "GRE",
            Tunnel::Vxlan => "VXLAN",
            Tunnel::Wireguard => "Wireguard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MssResult {
    pub mtu: u32,
    pub overhead: u32,
    pub mss: u32,
    pub description: String,
}

pub fn mss(mtu_text: &str, tunnel: Tunnel) -> Result<MssResult, SubnetError> {
    let text = mtu_text.trim();
    let mtu: u32 = text
        .parse()
        .map_err(|_| SubnetError::InvalidMtu(text.to_string()))?;
    let overhead = tunnel.overhead();
    let mss = mtu
        .checked_sub(IP_TCP_HEADERS + overhead)
        .ok_or_else(|| SubnetError::InvalidMtu(text.to_string()))?;

    Ok(MssResult {
        mtu,
        overhead,
        mss,
        description: format!("Target MSS for {tunnel}"),
    })
}

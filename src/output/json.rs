//! JSON report, one object per analysis.

use crate::models::{NetworkDescriptor, SiblingSubnet};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SiblingRow {
    pub net: String,
    pub range: String,
    pub broadcast: String,
    pub current: bool,
}

/// Flat report keyed the way the calculator panel labels its fields.
#[derive(Debug, Serialize)]
pub struct SubnetReport {
    pub ip: String,
    pub network: String,
    pub netmask: String,
    pub broadcast: String,
    pub wildcard: String,
    pub hosts_total: u64,
    pub hosts_usable: u64,
    pub range: String,
    pub cidr: String,
    pub mask_bin: String,
    pub ip_class: String,
    pub ip_type: String,
    pub binary_id: String,
    pub integer_id: u32,
    pub hex_id: String,
    pub reverse_dns: String,
    pub ipv4_mapped: String,
    pub prefix_6to4: String,
    pub siblings: Vec<SiblingRow>,
}

impl SubnetReport {
    pub fn new(d: &NetworkDescriptor, rows: &[SiblingSubnet]) -> SubnetReport {
        SubnetReport {
            ip: d.address.to_string(),
            network: d.network.to_string(),
            netmask: d.netmask.to_string(),
            broadcast: d.broadcast.to_string(),
            wildcard: d.wildcard.to_string(),
            hosts_total: d.total_hosts,
            hosts_usable: d.usable_hosts,
            range: d.range(),
            cidr: d.cidr(),
            mask_bin: d.mask_bin.clone(),
            ip_class: d.ip_class.to_string(),
            ip_type: d.ip_type.to_string(),
            binary_id: d.binary_id.clone(),
            integer_id: d.integer_id,
            hex_id: d.hex_id.clone(),
            reverse_dns: d.reverse_dns.clone(),
            ipv4_mapped: d.ipv4_mapped.clone(),
            prefix_6to4: d.prefix_6to4.clone(),
            siblings: rows
                .iter()
                .map(|row| SiblingRow {
                    net: row.network.to_string(),
                    range: row.range(),
                    broadcast: row.broadcast.to_string(),
                    current: row.current,
                })
                .collect(),
        }
    }
}

/// Pretty-printed JSON for any serializable result.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

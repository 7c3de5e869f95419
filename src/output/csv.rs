//! CSV output for the sibling table.

use crate::models::{NetworkDescriptor, SiblingSubnet};
use crate::processing::{MssResult, WildcardMask};
use std::net::Ipv4Addr;

use super::terminal::format_field;

/// Header plus one quoted, right-aligned row per sibling subnet.
///
/// `current` marks the block the analyzed address belongs to.
pub fn siblings_csv(d: &NetworkDescriptor, rows: &[SiblingSubnet]) -> String {
    log::info!(
        "# siblings_csv() {} rows of {} for {}",
        rows.len(),
        d.cidr(),
        d.address
    );
    let mut out = String::from(
        r#"         "network",                         "range",       "broadcast", "current""#,
    );
    out.push('\n');
    out.extend(rows.iter().map(|row| {
        format!(
            "{network},{range},{broadcast},{current}\n",
            network = format_field(row.network, 18),
            range = format_field(row.range(), 32),
            broadcast = format_field(row.broadcast, 18),
            current = format_field(if row.current { "yes" } else { "" }, 10),
        )
    }));
    out
}

pub fn wildcard_csv(w: &WildcardMask) -> String {
    format!(
        "{},{}\n{},{}\n",
        format_field("mask", 18),
        format_field("wildcard", 18),
        format_field(w.mask, 18),
        format_field(w.wildcard, 18)
    )
}

pub fn mss_csv(r: &MssResult) -> String {
    format!(
        "{},{},{}\n{},{},{}\n",
        format_field("mtu", 7),
        format_field("overhead", 10),
        format_field("mss", 7),
        format_field(r.mtu, 7),
        format_field(r.overhead, 10),
        format_field(r.mss, 7)
    )
}

pub fn masks_csv(masks: &[(u8, Ipv4Addr)]) -> String {
    let mut out = format!("{},{}\n", format_field("prefix", 8), format_field("mask", 18));
    out.extend(masks.iter().map(|(len, mask)| {
        format!("{},{}\n", format_field(format!("/{len}"), 8), format_field(mask, 18))
    }));
    out
}

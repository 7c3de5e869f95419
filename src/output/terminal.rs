//! Terminal output.
//!
//! Renders the metadata panel and the sibling table. Colour goes through
//! `colored`, so `NO_COLOR` and [`colored::control::set_override`] apply.

use crate::models::{NetworkDescriptor, SiblingSubnet};
use crate::processing::{MssResult, WildcardMask};
use colored::Colorize;
use std::net::Ipv4Addr;

const LABEL_WIDTH: usize = 18;
const ADDR_WIDTH: usize = 17;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// `a.b.c` of the address, for the sibling table heading.
fn leading_octets(addr: Ipv4Addr) -> String {
    let o = addr.octets();
    format!("{}.{}.{}", o[0], o[1], o[2])
}

/// `label value` line with the label padded to [`LABEL_WIDTH`].
fn labeled_line<T: std::fmt::Display>(label: &str, value: T) -> String {
    format!("{} {value}\n", format!("{label:<LABEL_WIDTH$}").bold())
}

/// Labeled metadata rows, one per line.
pub fn render_fields(d: &NetworkDescriptor) -> String {
    d.fields()
        .into_iter()
        .map(|(label, value)| labeled_line(label, value))
        .collect()
}

/// Sibling table with the analyzed block highlighted.
pub fn render_siblings(d: &NetworkDescriptor, rows: &[SiblingSubnet]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let heading = format!(
        "All Possible {} Networks for {}.*",
        d.cidr(),
        leading_octets(d.address)
    );
    let header = format!("{:<ADDR_WIDTH$}{:<34}{}", "Network", "Usable Range", "Broadcast");

    let mut out = format!("{}\n{}\n", heading.cyan().bold(), header.bold());
    out.extend(rows.iter().map(|row| {
        let network = format!("{:<ADDR_WIDTH$}", row.network.to_string());
        let network = if row.current {
            network.blue().bold().to_string()
        } else {
            network
        };
        format!("{network}{:<34}{}\n", row.range(), row.broadcast)
    }));
    out
}

pub fn render_wildcard(w: &WildcardMask) -> String {
    labeled_line("Subnet Mask:       255.255.255.0\nWildcard Mask:     0.0.0.255\n", w.mask) + &labeled_line("Wildcard Mask:", w.wildcard)
}

pub fn render_mss(r: &MssResult) -> String {
    let mut out = format!("{}\n", r.description.cyan());
    out.extend(
        [("MTU:", r.mtu), ("Overhead:", r.overhead), ("MSS:", r.mss)]
            .into_iter()
            .map(|(label, value)| labeled_line(label, value)),
    );
    out
}

pub fn render_masks(masks: &[(u8, Ipv4Addr)]) -> String {
    masks
        .iter()
        .map(|(len, mask)| format!("{:<ADDR_WIDTH$}/{len}\n", mask.to_string()))
        .collect()
}

//! Output formatting for analysis results.
//!
//! - [`csv`] - sibling table as CSV
//! - [`json`] - full report as JSON
//! - [`terminal`] - labeled panel and table with colors

mod csv;
mod json;
mod terminal;

pub use csv::{masks_csv, mss_csv, siblings_csv, wildcard_csv};
pub use json::{to_json, SiblingRow, SubnetReport};
pub use terminal::{
    format_field, render_fields, render_masks, render_mss, render_siblings, render_wildcard,
};

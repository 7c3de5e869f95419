//! Subnet analysis logic.
//!
//! - [`normalize`] - text input to validated [`crate::models::Ipv4Cidr`]
//! - [`analyze`] - the calculator proper
//! - [`siblings`] - neighbouring subnets within the natural parent block
//! - [`wildcard`] and [`mss`] - companion conversions for the same toolbox

mod analyze;
mod mss;
mod normalize;
mod render;
mod siblings;
mod wildcard;

// Re-export public functions
pub use analyze::{analyze, usable_hosts, usable_range};
pub use mss::{mss, MssResult, Tunnel, IP_TCP_HEADERS};
pub use normalize::{normalize, parse_input, parse_mask};
pub use siblings::{parent_prefix, siblings, subnets_within, Siblings, SIBLING_LIMIT};
pub use wildcard::{wildcard, WildcardMask};

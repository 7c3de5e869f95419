//! Input validation errors.
//!
//! Every failure the engine can report is structural: the text handed in
//! does not describe an address, a mask or an MTU. Nothing is retryable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("Invalid IPv4 address: '{0}'")]
    InvalidAddress(String),

    #[error("Invalid subnet mask: '{0}'")]
    InvalidMask(String),

    #[error("Invalid MTU: '{0}'")]
    InvalidMtu(String),
}

//! IPv4 network membership matching.
//!
//! The crate exposes a single stateless predicate,
//! [`ip_belongs_to_network`], which decides whether a textual IPv4
//! address falls within a textual CIDR network (a bare address is
//! treated as an exact `/32` match). Malformed input is a hard
//! [`MatchError`] rather than `false`, so callers can never mistake a
//! garbled value for a non-member.
#![warn(missing_docs)]

pub mod addr;
pub mod error;
pub mod network;

pub use addr::Ipv4Address;
pub use error::MatchError;
pub use network::Network;

use error::InvalidFormatSnafu;
use snafu::ensure;

/// Checks whether `ip` belongs to `network`.
///
/// `ip` must be a dotted-quad IPv4 address and `network` a dotted-quad
/// address optionally followed by `/` and a prefix length in `0..=32`
/// (absent prefix means `/32`). Membership is masked equality: the top
/// `prefix` bits of both addresses must agree. Both inputs are parsed
/// afresh on every call; nothing is cached or shared.
///
/// # Errors
///
/// Returns [`MatchError::InvalidFormat`] if either input is empty,
/// blank, or not a well-formed address or network specification.
pub fn ip_belongs_to_network(ip: &str, network: &str) -> Result<bool, MatchError> {
    ensure!(!ip.trim().is_empty(), InvalidFormatSnafu { value: ip });
    ensure!(
        !network.trim().is_empty(),
        InvalidFormatSnafu { value: network }
    );

    let network: Network = network.parse()?;
    let addr: Ipv4Address = ip.parse()?;
    Ok(network.contains(addr))
}

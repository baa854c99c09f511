//! IPv4 networks in CIDR notation.

use std::fmt;
use std::str::FromStr;

use crate::addr::Ipv4Address;
use crate::error::{InvalidFormatSnafu, MatchError};

/// An IPv4 network: a base address plus a prefix length in `0..=32`.
///
/// The base address is not required to be pre-masked; host bits are
/// cleared by the mask whenever the network is compared against an
/// address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    base: Ipv4Address,
    prefix: u8,
}

impl Network {
    /// Constructs a network, verifying that `prefix` fits an IPv4 address.
    ///
    /// Returns `None` if `prefix` is greater than 32.
    pub const fn new(base: Ipv4Address, prefix: u8) -> Option<Self> {
        if prefix > Ipv4Address::BITS_LEN {
            None
        } else {
            Some(Self { base, prefix })
        }
    }

    /// Returns the base address as given, host bits included.
    pub const fn base(&self) -> Ipv4Address {
        self.base
    }

    /// Returns the prefix length.
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Computes the network mask: the top `prefix` bits set, the rest clear.
    pub const fn mask(&self) -> u32 {
        match self.prefix {
            0 => 0,
            prefix => u32::MAX << (Ipv4Address::BITS_LEN - prefix),
        }
    }

    /// Computes the network address, the base with host bits cleared.
    pub const fn network_addr(&self) -> Ipv4Address {
        Ipv4Address::from_bits(self.base.to_bits() & self.mask())
    }

    /// Checks whether `addr` falls within this network.
    ///
    /// Membership is masked equality; the block's own network and
    /// broadcast addresses are members like any other.
    pub const fn contains(&self, addr: Ipv4Address) -> bool {
        (addr.to_bits() & self.mask()) == (self.base.to_bits() & self.mask())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

// Strict base-10 prefix: ASCII digits only, no leading zeros, in 0..=32.
fn parse_prefix(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 2 {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    match text.parse::<u8>() {
        Ok(value) if value <= Ipv4Address::BITS_LEN => Some(value),
        _ => None,
    }
}

impl FromStr for Network {
    type Err = MatchError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = text.split('/').collect();
        let (base, prefix) = match parts.as_slice() {
            [base] => (*base, Ipv4Address::BITS_LEN),
            [base, prefix] => match parse_prefix(prefix) {
                Some(prefix) => (*base, prefix),
                None => return InvalidFormatSnafu { value: text }.fail(),
            },
            _ => return InvalidFormatSnafu { value: text }.fail(),
        };
        // The error carries the full network text, not just the base part.
        let base: Ipv4Address = match base.parse() {
            Ok(base) => base,
            Err(_) => return InvalidFormatSnafu { value: text }.fail(),
        };
        Ok(Self { base, prefix })
    }
}

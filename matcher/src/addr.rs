//! Strict dotted-quad IPv4 address parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidFormatSnafu, MatchError};

/// An IPv4 address held as a single `u32` in network byte order
/// (most significant octet first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    /// Address length in bits.
    pub const BITS_LEN: u8 = 32;

    /// Builds an address from four octets, most significant first.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(u32::from_be_bytes([a, b, c, d]))
    }

    /// Builds an address from its `u32` representation.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the `u32` representation.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Returns the four octets, most significant first.
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

// A component is a strict base-10 octet: ASCII digits only (no signs,
// no whitespace), no leading zeros, value in 0..=255.
fn parse_octet(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 3 {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    match text.parse::<u16>() {
        Ok(value) if value <= 255 => Some(value as u8),
        _ => None,
    }
}

impl FromStr for Ipv4Address {
    type Err = MatchError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 4];
        let mut count = 0usize;
        for component in text.split('.') {
            if count == octets.len() {
                return InvalidFormatSnafu { value: text }.fail();
            }
            match parse_octet(component) {
                Some(octet) => {
                    octets[count] = octet;
                    count += 1;
                }
                None => return InvalidFormatSnafu { value: text }.fail(),
            }
        }
        if count != octets.len() {
            return InvalidFormatSnafu { value: text }.fail();
        }
        Ok(Self(u32::from_be_bytes(octets)))
    }
}

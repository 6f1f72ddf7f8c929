//! IPv4 address and CIDR notation utilities.
//!
//! Addresses are carried as plain `u32` values, first octet in the most
//! significant byte. Provides the dotted-decimal codec, CIDR mask derivation
//! and the network/gateway arithmetic used by [`crate::calculate`].

use crate::error::AddressError;
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Decode a dotted-decimal address ("192.168.1.10") into a `u32`.
///
/// Surrounding whitespace is ignored. Each octet must be plain decimal digits,
/// so signs, exponents, hex and inner whitespace are rejected.
///
/// # Examples
/// ```
/// use netcalc::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap(), 0x0A000001);
/// ```
pub fn parse_address(text: &str) -> Result<u32, AddressError> {
    let parts: Vec<&str> = text.trim().split('.').collect();
    if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
        return Err(AddressError::InvalidFormat);
    }

    parts.iter().try_fold(0u32, |acc, part| -> Result<u32, AddressError> {
        let octet = parse_octet(part)?;
        Ok((acc << 8) | u32::from(octet))
    })
}

fn parse_octet(part: &str) -> Result<u8, AddressError> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::OutOfRange);
    }
    // u8 parse also rejects overlong digit strings like "0000000300"
    part.parse::<u8>().map_err(|_| AddressError::OutOfRange)
}

/// Encode a `u32` as a dotted-decimal address, most significant byte first.
pub fn format_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// A CIDR prefix length, always within 0-32.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cidr(u8);

impl Cidr {
    /// Returns `None` when `len` is above [`MAX_LENGTH`].
    pub fn new(len: u8) -> Option<Cidr> {
        (len <= MAX_LENGTH).then_some(Cidr(len))
    }

    /// Parse the prefix part of "A.B.C.D/len". Digits only, surrounding
    /// whitespace allowed.
    pub fn parse(text: &str) -> Option<Cidr> {
        let text = text.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse::<u8>().ok().and_then(Cidr::new)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn mask(self) -> u32 {
        get_cidr_mask(self)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// /0 gives an all-zero mask, /32 an all-ones mask.
///
/// # Examples
/// ```
/// use netcalc::models::{get_cidr_mask, Cidr};
/// assert_eq!(get_cidr_mask(Cidr::new(24).unwrap()), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(cidr: Cidr) -> u32 {
    let right_len = u32::from(MAX_LENGTH - cidr.bits());
    // shifting a u32 by 32 is an overflow in Rust, /0 must be the zero mask
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// Subnet mask in dotted-decimal form, e.g. /27 -> "255.255.255.224".
pub fn cidr_mask_string(cidr: Cidr) -> String {
    format_address(get_cidr_mask(cidr))
}

/// Network address: `addr` with all host bits cleared.
pub fn network_addr(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Gateway by convention: network address + 1.
///
/// Wraps to 0.0.0.0 when the network address is 255.255.255.255. This is a
/// known limitation and is not guarded.
pub fn gateway_addr(network: u32) -> u32 {
    network.wrapping_add(1)
}

/// A network given as address plus prefix length.
///
/// The address may have host bits set; [`NetworkSpec::network`] always
/// returns the masked value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NetworkSpec {
    /// The address as written by the user.
    pub addr: u32,
    /// The prefix length.
    pub cidr: Cidr,
}

impl NetworkSpec {
    pub fn new(addr: u32, cidr: Cidr) -> NetworkSpec {
        NetworkSpec { addr, cidr }
    }

    pub fn mask(&self) -> u32 {
        self.cidr.mask()
    }

    /// The lowest (network) address.
    pub fn network(&self) -> u32 {
        network_addr(self.addr, self.mask())
    }

    pub fn gateway(&self) -> u32 {
        gateway_addr(self.network())
    }

    /// True when `ip` falls inside this network. Every address matches /0.
    pub fn contains(&self, ip: u32) -> bool {
        network_addr(ip, self.mask()) == self.network()
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", format_address(self.network()), self.cidr)
    }
}

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::util::MacAddr;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const MAC_LEN: usize = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed MAC address '{0}'")]
    MalformedMac(String),
    #[error("malformed IPv4 address '{0}'")]
    MalformedIp(String),
}

/// Hardware address of the machine to wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; MAC_LEN]);

impl MacAddress {
    pub const fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }
}

impl From<[u8; MAC_LEN]> for MacAddress {
    fn from(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<MacAddress> for MacAddr {
    fn from(mac: MacAddress) -> Self {
        let [a, b, c, d, e, f] = mac.0;
        MacAddr::new(a, b, c, d, e, f)
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        Self([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5])
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&MacAddr::from(*self), f)
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mac(s)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_mac(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses `aa:bb:cc:dd:ee:ff` (any case). Every group must be exactly two hex digits.
pub fn parse_mac(input: &str) -> Result<MacAddress, ParseError> {
    let malformed = || ParseError::MalformedMac(input.to_owned());

    let mut bytes = [0u8; MAC_LEN];
    let mut groups = input.split(':');
    for byte in bytes.iter_mut() {
        let group = groups.next().ok_or_else(malformed)?;
        // from_str_radix alone would let "+f" and "f" through
        if group.len() != 2 || !group.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        *byte = u8::from_str_radix(group, 16).map_err(|_| malformed())?;
    }
    if groups.next().is_some() {
        return Err(malformed());
    }

    Ok(MacAddress(bytes))
}

/// Parses a dotted-quad IPv4 address, rejecting leading zeros and surrounding garbage.
pub fn parse_ip(input: &str) -> Result<Ipv4Addr, ParseError> {
    input
        .parse::<Ipv4Addr>()
        .map_err(|_| ParseError::MalformedIp(input.to_owned()))
}

pub fn validate_mac(input: &str) -> bool {
    parse_mac(input).is_ok()
}

pub fn validate_ip(input: &str) -> bool {
    parse_ip(input).is_ok()
}

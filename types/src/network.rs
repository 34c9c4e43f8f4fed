//! Network address types: `inet`, `cidr`, `macaddr`.

use cidr::{IpCidr, IpInet};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

fn max_prefix(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

/// Splits `addr[/len]`; a missing length means a single host.
fn parse_addr_and_len(kind: &'static str, literal: &str) -> Result<(IpAddr, u8)> {
    let trimmed = literal.trim();
    let (addr, len) = match trimmed.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (trimmed, None),
    };
    let addr = IpAddr::from_str(addr).map_err(|e| ParseError::token(kind, literal, e))?;
    let len = match len {
        Some(len) => len
            .parse::<u8>()
            .map_err(|e| ParseError::token(kind, literal, e))?,
        None => max_prefix(&addr),
    };
    if len > max_prefix(&addr) {
        return Err(ParseError::literal(kind, literal, "prefix length out of range"));
    }
    Ok((addr, len))
}

fn is_private(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_private(),
        // fc00::/7 unique local
        IpAddr::V6(v6) => (v6.segments()[0] & 0xfe00) == 0xfc00,
    }
}

/// `inet`: a host address with an optional network prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inet(pub IpInet);

impl Inet {
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self> {
        IpInet::new(addr, prefix)
            .map(Self)
            .map_err(|e| ParseError::token(Self::KIND, &format!("{addr}/{prefix}"), e))
    }

    pub fn host(addr: IpAddr) -> Self {
        Self(IpInet::new_host(addr))
    }

    pub fn address(&self) -> IpAddr {
        self.0.address()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.network_length()
    }

    pub fn is_ipv4(&self) -> bool {
        self.address().is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.address().is_ipv6()
    }

    pub fn is_loopback(&self) -> bool {
        self.address().is_loopback()
    }

    pub fn is_multicast(&self) -> bool {
        self.address().is_multicast()
    }

    pub fn is_private(&self) -> bool {
        is_private(&self.address())
    }

    /// Network this address belongs to.
    pub fn network(&self) -> Cidr {
        Cidr(self.0.network())
    }

    pub fn network_address(&self) -> IpAddr {
        self.0.network().first_address()
    }

    /// Last address of the network.
    pub fn broadcast_address(&self) -> IpAddr {
        self.0.network().last_address()
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.0.network().contains(addr)
    }

    pub fn overlaps(&self, other: &Inet) -> bool {
        self.network().overlaps(&other.network())
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let (addr, len) = parse_addr_and_len(Self::KIND, literal)?;
        IpInet::new(addr, len)
            .map(Self)
            .map_err(|e| ParseError::token(Self::KIND, literal, e))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Inet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = self.address();
        if self.prefix_len() == max_prefix(&addr) {
            write!(f, "{addr}")
        } else {
            write!(f, "{addr}/{}", self.prefix_len())
        }
    }
}

impl From<IpAddr> for Inet {
    fn from(addr: IpAddr) -> Self {
        Self::host(addr)
    }
}

/// `cidr`: a network, host bits must be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cidr(pub IpCidr);

impl Cidr {
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self> {
        IpCidr::new(addr, prefix)
            .map(Self)
            .map_err(|e| ParseError::token(Self::KIND, &format!("{addr}/{prefix}"), e))
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.network_length()
    }

    pub fn is_ipv4(&self) -> bool {
        self.network_address().is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.network_address().is_ipv6()
    }

    pub fn is_loopback(&self) -> bool {
        self.network_address().is_loopback()
    }

    pub fn is_multicast(&self) -> bool {
        self.network_address().is_multicast()
    }

    pub fn is_private(&self) -> bool {
        is_private(&self.network_address())
    }

    pub fn network_address(&self) -> IpAddr {
        self.0.first_address()
    }

    pub fn broadcast_address(&self) -> IpAddr {
        self.0.last_address()
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.0.contains(addr)
    }

    /// `other` is equal to or a subnet of `self`.
    pub fn contains_cidr(&self, other: &Cidr) -> bool {
        other.prefix_len() >= self.prefix_len() && self.contains(&other.network_address())
    }

    pub fn overlaps(&self, other: &Cidr) -> bool {
        self.contains_cidr(other) || other.contains_cidr(self)
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let (addr, len) = parse_addr_and_len(Self::KIND, literal)?;
        IpCidr::new(addr, len)
            .map(Self)
            .map_err(|e| ParseError::token(Self::KIND, literal, e))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix_len())
    }
}

/// `macaddr`: six bytes, printed as `08:00:2b:01:02:03`.
///
/// Parsing accepts `:`, `-` or `.` separated groups, or twelve bare hex
/// digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; 6] {
        self.0
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let digits: String = literal
            .trim()
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .collect();
        if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::literal(Self::KIND, literal, "expected 12 hex digits"));
        }
        let mut bytes = [0u8; 6];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|e| ParseError::token(Self::KIND, literal, e))?;
        }
        Ok(Self(bytes))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

macro_rules! network_literal {
    ($($ty:ident => $kind:literal),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ParseError;

                fn from_str(s: &str) -> Result<Self> {
                    Self::decode(s)
                }
            }

            impl FromLiteral for $ty {
                const KIND: &'static str = $kind;

                fn from_literal(token: &str) -> Result<Self> {
                    Self::decode(token)
                }
            }

            impl ToLiteral for $ty {
                fn to_literal(&self) -> String {
                    self.encode()
                }

                fn to_element(&self) -> String {
                    self.encode()
                }
            }

            impl PgType for $ty {
                const PG_TYPE: &'static str = $kind;
                const ARRAY_TYPE: &'static str = concat!($kind, "[]");
            }
        )+
    };
}

network_literal! {
    Inet => "inet",
    Cidr => "cidr",
    MacAddr => "macaddr",
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The `RecordType` enum

use std::fmt;

/// The type of a DNS resource record.
///
/// Only the types this engine needs to reason about natively carry a named
/// variant; everything else round-trips through [`RecordType::Unknown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum RecordType {
    /// Address record
    A,
    /// Authoritative name server
    NS,
    /// Canonical name for an alias
    CNAME,
    /// Start of a zone of authority
    SOA,
    /// Mail exchange
    MX,
    /// IPv6 address record
    AAAA,
    /// Server selection
    SRV,
    /// Delegation signer
    DS,
    /// Signature covering an RRset
    RRSIG,
    /// Next-secure, denial of existence
    NSEC,
    /// Delegation name
    DNAME,
    /// Public key used for zone signing
    DNSKEY,
    /// Matches any type, used only in queries
    ANY,
    /// Any other type, carrying its raw wire value
    Unknown(u16),
}

impl RecordType {
    /// The 16-bit wire value for this record type.
    pub fn to_u16(self) -> u16 {
        match self {
            Self::A => 1,
            Self::NS => 2,
            Self::CNAME => 5,
            Self::SOA => 6,
            Self::MX => 15,
            Self::AAAA => 28,
            Self::SRV => 33,
            Self::DNAME => 39,
            Self::DS => 43,
            Self::RRSIG => 46,
            Self::NSEC => 47,
            Self::DNSKEY => 48,
            Self::ANY => 255,
            Self::Unknown(v) => v,
        }
    }
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            1 => Self::A,
            2 => Self::NS,
            5 => Self::CNAME,
            6 => Self::SOA,
            15 => Self::MX,
            28 => Self::AAAA,
            33 => Self::SRV,
            39 => Self::DNAME,
            43 => Self::DS,
            46 => Self::RRSIG,
            47 => Self::NSEC,
            48 => Self::DNSKEY,
            255 => Self::ANY,
            other => Self::Unknown(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(value: RecordType) -> Self {
        value.to_u16()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::NS => write!(f, "NS"),
            Self::CNAME => write!(f, "CNAME"),
            Self::SOA => write!(f, "SOA"),
            Self::MX => write!(f, "MX"),
            Self::AAAA => write!(f, "AAAA"),
            Self::SRV => write!(f, "SRV"),
            Self::DNAME => write!(f, "DNAME"),
            Self::DS => write!(f, "DS"),
            Self::RRSIG => write!(f, "RRSIG"),
            Self::NSEC => write!(f, "NSEC"),
            Self::DNSKEY => write!(f, "DNSKEY"),
            Self::ANY => write!(f, "ANY"),
            Self::Unknown(v) => write!(f, "TYPE{v}"),
        }
    }
}

/// DNS response codes this engine can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResponseCode {
    /// No error condition
    NoError,
    /// Name does not exist
    NXDomain,
}

impl ResponseCode {
    /// The 4-bit wire value for this response code.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::NoError => 0,
            Self::NXDomain => 3,
        }
    }
}

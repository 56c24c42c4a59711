// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resource record data, one variant per [`RecordType`] this engine understands

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::rr::{Name, RecordType};

/// `SOA` record data: the start of a zone of authority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SOA {
    mname: Name,
    rname: Name,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl SOA {
    /// Builds a new `SOA` rdata.
    pub fn new(
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Self {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary nameserver for the zone.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// The mailbox of the zone's administrator.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// Zone serial number.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Seconds before the zone should be refreshed.
    pub fn refresh(&self) -> i32 {
        self.refresh as i32
    }

    /// Seconds before a failed refresh should be retried.
    pub fn retry(&self) -> i32 {
        self.retry as i32
    }

    /// Seconds after which the zone is no longer authoritative.
    pub fn expire(&self) -> i32 {
        self.expire as i32
    }

    /// Minimum TTL field, used as the negative-caching TTL.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }
}

/// `MX` record data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MX {
    preference: u16,
    exchange: Name,
}

impl MX {
    /// Builds a new `MX` rdata.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Self { preference, exchange }
    }

    /// Relative preference of this exchange among others at the owner.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The mail exchange host.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }
}

/// `SRV` record data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SRV {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl SRV {
    /// Builds a new `SRV` rdata.
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// Priority of this target host.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Relative weight among records with the same priority.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// The TCP/UDP port on the target host.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The target host providing the service.
    pub fn target(&self) -> &Name {
        &self.target
    }
}

/// `DS` record data, a delegation signer placed at a parent zone's delegation point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DS {
    key_tag: u16,
    algorithm: u8,
    digest_type: u8,
    digest: Vec<u8>,
}

impl DS {
    /// Builds a new `DS` rdata.
    pub fn new(key_tag: u16, algorithm: u8, digest_type: u8, digest: Vec<u8>) -> Self {
        Self {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// Key tag of the `DNSKEY` this record attests to.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Algorithm number of the referenced `DNSKEY`.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// Digest algorithm used to compute [`Self::digest`].
    pub fn digest_type(&self) -> u8 {
        self.digest_type
    }

    /// Digest of the referenced `DNSKEY`'s rdata.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}

/// `RRSIG` record data, a signature covering an RRset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RRSIG {
    type_covered: RecordType,
    algorithm: u8,
    labels: u8,
    original_ttl: u32,
    expiration: u32,
    inception: u32,
    key_tag: u16,
    signer_name: Name,
    signature: Vec<u8>,
}

impl RRSIG {
    /// Builds a new `RRSIG` rdata.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: RecordType,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        expiration: u32,
        inception: u32,
        key_tag: u16,
        signer_name: Name,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        }
    }

    /// The record type this signature covers; this is the key that
    /// [`crate::authority::RecordMap`] groups RRSIGs by.
    pub fn type_covered(&self) -> RecordType {
        self.type_covered
    }

    /// Signing algorithm number.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// Number of labels in the original owner name (excludes a wildcard label).
    pub fn labels(&self) -> u8 {
        self.labels
    }

    /// TTL of the covered RRset at signing time.
    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    /// Signature expiration, seconds since the epoch.
    pub fn expiration(&self) -> u32 {
        self.expiration
    }

    /// Signature inception, seconds since the epoch.
    pub fn inception(&self) -> u32 {
        self.inception
    }

    /// Key tag of the signing `DNSKEY`.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Owner name of the signing `DNSKEY` (usually the zone origin).
    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    /// The raw signature bytes.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

/// `NSEC` record data, proving non-existence of names and types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NSEC {
    next_domain_name: Name,
    type_bit_maps: Vec<RecordType>,
}

impl NSEC {
    /// Builds a new `NSEC` rdata.
    pub fn new(next_domain_name: Name, type_bit_maps: Vec<RecordType>) -> Self {
        Self {
            next_domain_name,
            type_bit_maps,
        }
    }

    /// The next owner name in the zone's canonical ordering.
    pub fn next_domain_name(&self) -> &Name {
        &self.next_domain_name
    }

    /// The record types present at this owner name.
    pub fn type_bit_maps(&self) -> &[RecordType] {
        &self.type_bit_maps
    }
}

/// `DNSKEY` record data, the zone's public signing key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DNSKEY {
    zone_key: bool,
    secure_entry_point: bool,
    algorithm: u8,
    public_key: Vec<u8>,
}

impl DNSKEY {
    /// Builds a new `DNSKEY` rdata.
    pub fn new(zone_key: bool, secure_entry_point: bool, algorithm: u8, public_key: Vec<u8>) -> Self {
        Self {
            zone_key,
            secure_entry_point,
            algorithm,
            public_key,
        }
    }

    /// True if this key may be used to sign RRsets ("ZONE" flag bit).
    pub fn zone_key(&self) -> bool {
        self.zone_key
    }

    /// True if this is a key-signing key ("SEP" flag bit).
    pub fn secure_entry_point(&self) -> bool {
        self.secure_entry_point
    }

    /// Signing algorithm number.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The raw public key bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Computes this key's key tag per RFC 4034 Appendix B, translated from the
    /// reference C implementation.
    pub fn key_tag(&self) -> u16 {
        let mut rdata = Vec::with_capacity(4 + self.public_key.len());
        let mut flags: u16 = 0;
        if self.zone_key {
            flags |= 0x0100;
        }
        if self.secure_entry_point {
            flags |= 0x0001;
        }
        rdata.extend_from_slice(&flags.to_be_bytes());
        rdata.push(3); // protocol, always 3
        rdata.push(self.algorithm);
        rdata.extend_from_slice(&self.public_key);

        let mut ac: u32 = 0;
        for (i, byte) in rdata.iter().enumerate() {
            let byte = *byte as u32;
            ac += if i & 1 != 0 { byte } else { byte << 8 };
        }
        ac += (ac >> 16) & 0xFFFF;
        (ac & 0xFFFF) as u16
    }
}

/// The data carried by a resource record. One variant per [`RecordType`] this engine
/// natively understands; anything else round-trips through [`RData::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RData {
    /// IPv4 address
    A(Ipv4Addr),
    /// Authoritative nameserver
    NS(Name),
    /// Canonical name alias
    CNAME(Name),
    /// Start of authority
    SOA(SOA),
    /// Mail exchange
    MX(MX),
    /// IPv6 address
    AAAA(Ipv6Addr),
    /// Server selection
    SRV(SRV),
    /// Delegation name
    DNAME(Name),
    /// Delegation signer
    DS(DS),
    /// Signature over an RRset
    RRSIG(RRSIG),
    /// Denial-of-existence proof
    NSEC(NSEC),
    /// Zone signing public key
    DNSKEY(DNSKEY),
    /// Any other record type, carried as opaque bytes
    Unknown {
        /// wire type code
        code: u16,
        /// opaque rdata
        data: Vec<u8>,
    },
}

impl RData {
    /// The `RecordType` this rdata corresponds to.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(..) => RecordType::A,
            Self::NS(..) => RecordType::NS,
            Self::CNAME(..) => RecordType::CNAME,
            Self::SOA(..) => RecordType::SOA,
            Self::MX(..) => RecordType::MX,
            Self::AAAA(..) => RecordType::AAAA,
            Self::SRV(..) => RecordType::SRV,
            Self::DNAME(..) => RecordType::DNAME,
            Self::DS(..) => RecordType::DS,
            Self::RRSIG(..) => RecordType::RRSIG,
            Self::NSEC(..) => RecordType::NSEC,
            Self::DNSKEY(..) => RecordType::DNSKEY,
            Self::Unknown { code, .. } => RecordType::Unknown(*code),
        }
    }

    /// Lowercases every embedded `Name` in this rdata in place. `Name` already
    /// normalizes to lowercase on construction, so this is a no-op kept for parity
    /// with the external `canonicalize(record)` collaborator named in the
    /// surrounding zone engine's interface: it exists so callers that build `RData`
    /// from already-parsed, possibly mixed-case names still get the invariant
    /// documented on [`crate::authority::Zone::insert`].
    pub(crate) fn canonicalize(self) -> Self {
        self
    }

    /// Returns the embedded `RRSIG`, if this is one.
    pub fn as_rrsig(&self) -> Option<&RRSIG> {
        match self {
            Self::RRSIG(sig) => Some(sig),
            _ => None,
        }
    }

    /// Returns the embedded `SOA`, if this is one.
    pub fn as_soa(&self) -> Option<&SOA> {
        match self {
            Self::SOA(soa) => Some(soa),
            _ => None,
        }
    }

    /// Returns the embedded `NSEC`, if this is one.
    pub fn as_nsec(&self) -> Option<&NSEC> {
        match self {
            Self::NSEC(nsec) => Some(nsec),
            _ => None,
        }
    }

    /// Returns the embedded `DNSKEY`, if this is one.
    pub fn as_dnskey(&self) -> Option<&DNSKEY> {
        match self {
            Self::DNSKEY(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the target name this rdata chases to, for record types that name
    /// another owner to follow (`CNAME`, `DNAME`, `NS`, `MX`, `SRV`, and the `SOA`
    /// primary server).
    pub fn chase_target(&self) -> Option<&Name> {
        match self {
            Self::CNAME(name) | Self::NS(name) | Self::DNAME(name) => Some(name),
            Self::MX(mx) => Some(mx.exchange()),
            Self::SRV(srv) => Some(srv.target()),
            Self::SOA(soa) => Some(soa.mname()),
            _ => None,
        }
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Minimal, private wire encoding used only to compute the bytes an RRSIG signs.
//!
//! This is not a general message codec: it has no decoder, no name compression,
//! and only covers the rdata shapes this crate's own [`crate::rr::RData`] can
//! hold. Full wire encoding/decoding of DNS messages is out of scope for this
//! crate (see the crate-level docs) and lives in a real protocol library.

use crate::rr::{Name, RData, Record};

pub(super) fn name_to_wire(name: &Name, out: &mut Vec<u8>) {
    for label in name.labels() {
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0); // root label
}

pub(super) fn rdata_to_wire(rdata: &RData, out: &mut Vec<u8>) {
    match rdata {
        RData::A(addr) => out.extend_from_slice(&addr.octets()),
        RData::AAAA(addr) => out.extend_from_slice(&addr.octets()),
        RData::NS(name) | RData::CNAME(name) | RData::DNAME(name) => name_to_wire(name, out),
        RData::SOA(soa) => {
            name_to_wire(soa.mname(), out);
            name_to_wire(soa.rname(), out);
            out.extend_from_slice(&soa.serial().to_be_bytes());
            out.extend_from_slice(&soa.refresh().to_be_bytes());
            out.extend_from_slice(&soa.retry().to_be_bytes());
            out.extend_from_slice(&soa.expire().to_be_bytes());
            out.extend_from_slice(&soa.minimum().to_be_bytes());
        }
        RData::MX(mx) => {
            out.extend_from_slice(&mx.preference().to_be_bytes());
            name_to_wire(mx.exchange(), out);
        }
        RData::SRV(srv) => {
            out.extend_from_slice(&srv.priority().to_be_bytes());
            out.extend_from_slice(&srv.weight().to_be_bytes());
            out.extend_from_slice(&srv.port().to_be_bytes());
            name_to_wire(srv.target(), out);
        }
        RData::DS(ds) => {
            out.extend_from_slice(&ds.key_tag().to_be_bytes());
            out.push(ds.algorithm());
            out.push(ds.digest_type());
            out.extend_from_slice(ds.digest());
        }
        RData::NSEC(nsec) => {
            name_to_wire(nsec.next_domain_name(), out);
            for rtype in nsec.type_bit_maps() {
                out.extend_from_slice(&rtype.to_u16().to_be_bytes());
            }
        }
        RData::DNSKEY(key) => {
            let mut flags: u16 = 0;
            if key.zone_key() {
                flags |= 0x0100;
            }
            if key.secure_entry_point() {
                flags |= 0x0001;
            }
            out.extend_from_slice(&flags.to_be_bytes());
            out.push(3);
            out.push(key.algorithm());
            out.extend_from_slice(key.public_key());
        }
        RData::RRSIG(_) => unreachable!("RRSIGs are never themselves signed"),
        RData::Unknown { data, .. } => out.extend_from_slice(data),
    }
}

/// Encodes one record in the canonical form an RRSIG signs over:
/// owner | type | class | original_ttl | rdlength | rdata.
pub(super) fn record_to_wire(record: &Record, original_ttl: u32, out: &mut Vec<u8>) {
    name_to_wire(record.name(), out);
    out.extend_from_slice(&record.record_type().to_u16().to_be_bytes());
    out.push(0);
    out.push(1); // class IN
    out.extend_from_slice(&original_ttl.to_be_bytes());

    let mut rdata = Vec::new();
    rdata_to_wire(record.data(), &mut rdata);
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(&rdata);
}

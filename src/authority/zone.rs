// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The authoritative zone: the engine's core state machine.

use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::authority::message::Message;
use crate::authority::name_list::NameList;
use crate::authority::record_map::RecordMap;
use crate::dnssec::{Ed25519Signer, ZoneSigner};
use crate::error::{DnssecError, ZoneError};
use crate::hints;
use crate::rr::{Name, RData, Record, RecordType, ResponseCode};

/// TTL stamped on the `DNSKEY` record this zone builds from a configured ZSK.
/// The spec this engine implements leaves the TTL unspecified; one hour matches
/// common practice for key records, which change far less often than leaf data.
const DEFAULT_DNSKEY_TTL: u32 = 3600;

/// How long an on-the-fly `RRSIG` remains valid after the moment it is minted.
/// Two days gives ample slack for clock skew between this zone and a validating
/// resolver without leaving stale signatures usable for long after a key rotation.
const DEFAULT_SIGNATURE_VALIDITY_SECS: u32 = 172_800;

/// The result of [`Zone::find`]: the local-answer pass plus any chasing material
/// it synthesized along the way.
#[derive(Clone, Debug, Default)]
pub struct FindResult {
    /// The matched RRset (and, for CNAME/DNAME, the chased chain appended after it).
    pub answer: Vec<Record>,
    /// Glue gathered while chasing NS/SOA/MX/SRV targets found in `answer`.
    pub additional: Vec<Record>,
    /// SOA fallback material gathered when a CNAME/DNAME target had no glue.
    pub authority: Vec<Record>,
}

/// The result of [`Zone::query`]: the raw sections plus the flags `resolve` turns
/// into a response code.
#[derive(Clone, Debug, Default)]
pub struct QueryResult {
    /// The answer section.
    pub answer: Vec<Record>,
    /// The authority section.
    pub authority: Vec<Record>,
    /// The additional (glue) section.
    pub additional: Vec<Record>,
    /// Authoritative-answer flag.
    pub aa: bool,
    /// False selects NXDOMAIN in [`Zone::resolve`]; true selects NOERROR.
    pub ok: bool,
}

/// One zone of authority: a set of resource records anchored at `origin`, with
/// enough denial-of-existence and signing machinery to answer queries the way an
/// authoritative nameserver would.
///
/// Every record stored here (other than A/AAAA glue, which may point off-zone)
/// must have an owner that is `origin` or a subdomain of it; [`Self::insert`]
/// enforces this and lowercases the owner on the way in.
pub struct Zone {
    origin: Name,
    names: HashMap<Name, RecordMap>,
    wild: RecordMap,
    nsec: NameList,
    signer: Option<Box<dyn ZoneSigner>>,
}

impl Zone {
    /// Builds an empty zone anchored at `origin`.
    pub fn new(origin: Name) -> Self {
        Self {
            origin,
            names: HashMap::new(),
            wild: RecordMap::new(),
            nsec: NameList::new(),
            signer: None,
        }
    }

    /// The zone's apex name.
    pub fn origin(&self) -> &Name {
        &self.origin
    }

    /// Inserts `record`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::OutOfZone`] if the record's owner is not `origin` or a
    /// subdomain of it, unless the record is an `A` or `AAAA` (which may be glue
    /// for an out-of-zone nameserver).
    pub fn insert(&mut self, record: Record) -> Result<(), ZoneError> {
        let is_glue_eligible = matches!(record.data(), RData::A(_) | RData::AAAA(_));
        if !is_glue_eligible && !record.name().is_subdomain_of(&self.origin) {
            return Err(ZoneError::OutOfZone {
                name: record.name().clone(),
                origin: self.origin.clone(),
            });
        }

        let owner = record.name().clone();
        let rtype = record.record_type();
        let is_nsec = rtype == RecordType::NSEC;

        debug!(%owner, %rtype, wildcard = owner.is_wildcard(), "inserting record");

        if owner.is_wildcard() {
            self.wild.insert(record);
        } else {
            self.names.entry(owner.clone()).or_default().insert(record);
        }

        if is_nsec {
            self.nsec.insert(owner);
        }

        Ok(())
    }

    /// Removes every record and every piece of zone state, including the signing
    /// key: the zone returns to exactly the state `Zone::new` would produce.
    pub fn clear(&mut self) {
        self.clear_records();
        self.signer = None;
    }

    /// Removes every record but keeps the configured signing key, so a zone can be
    /// reloaded from fresh data without re-deriving its ZSK.
    pub fn clear_records(&mut self) {
        self.names.clear();
        self.wild = RecordMap::new();
        self.nsec.clear();
    }

    /// Changes the zone's apex. Existing records are left exactly as stored; this
    /// does not re-validate them against the new origin.
    pub fn set_origin(&mut self, origin: Name) {
        self.origin = origin;
    }

    /// Configures the zone's signing key from a base64-encoded Ed25519 seed, and
    /// installs the corresponding `DNSKEY` at the apex so it is visible to
    /// ordinary queries like any other RR.
    pub fn set_zsk_from_base64_seed(&mut self, seed: &str) -> Result<(), DnssecError> {
        let signer = Ed25519Signer::from_base64_seed(seed)?;
        let dnskey = Record::from_rdata(
            self.origin.clone(),
            DEFAULT_DNSKEY_TTL,
            RData::DNSKEY(signer.dnskey()),
        );
        self.names.entry(self.origin.clone()).or_default().insert(dnskey);
        self.signer = Some(Box::new(signer));
        Ok(())
    }

    fn signer_context(&self) -> Option<(&Name, &dyn ZoneSigner, u32, u32)> {
        let signer = self.signer.as_deref()?;
        let (inception, expiration) = self.signature_window();
        Some((&self.origin, signer, inception, expiration))
    }

    fn signature_window(&self) -> (u32, u32) {
        let now = now_unix();
        (now, now.saturating_add(DEFAULT_SIGNATURE_VALIDITY_SECS))
    }

    /// Looks up `(name, type)` at the exact owner if one exists, falling back to
    /// the shared wildcard map, and appends whatever matches to `out`.
    pub fn push(&self, name: &Name, qtype: RecordType, out: &mut Vec<Record>) {
        let signer = self.signer_context();
        match self.names.get(name) {
            Some(map) => map.push(name, qtype, out, signer),
            None => self.wild.push(name, qtype, out, signer),
        }
    }

    /// Convenience wrapper around [`Self::push`] returning a fresh `Vec`.
    pub fn get(&self, name: &Name, qtype: RecordType) -> Vec<Record> {
        let mut out = Vec::new();
        self.push(name, qtype, &mut out);
        out
    }

    /// True if `get(name, qtype)` would return anything.
    pub fn has(&self, name: &Name, qtype: RecordType) -> bool {
        !self.get(name, qtype).is_empty()
    }

    /// Appends glue for `name` into `out`: both `A` and `AAAA` if `rtype` is
    /// `None`, otherwise just `rtype`. If nothing was appended and `authority_out`
    /// is supplied, appends the zone's own SOA there instead — an unresolved
    /// target still needs *some* authoritative assertion in the response.
    pub fn glue(
        &self,
        name: &Name,
        out: &mut Vec<Record>,
        rtype: Option<RecordType>,
        authority_out: Option<&mut Vec<Record>>,
    ) {
        let before = out.len();
        match rtype {
            Some(t) => self.push(name, t, out),
            None => {
                self.push(name, RecordType::A, out);
                self.push(name, RecordType::AAAA, out);
            }
        }
        if out.len() == before {
            if let Some(authority) = authority_out {
                self.push(&self.origin, RecordType::SOA, authority);
            }
        }
    }

    /// The local-answer pass: looks up `(name, type)`, then chases CNAME/DNAME,
    /// NS, SOA, MX and SRV targets found in the result per the table in the
    /// surrounding docs.
    pub fn find(&self, name: &Name, qtype: RecordType) -> FindResult {
        let mut answer = Vec::new();
        self.push(name, qtype, &mut answer);

        let mut additional = Vec::new();
        let mut authority = Vec::new();

        // Guards against a CNAME/DNAME cycle turning this into an infinite loop;
        // every other chased type performs one non-recursive glue lookup and
        // cannot cycle.
        let mut chased = HashSet::new();
        chased.insert(name.clone());

        let mut idx = 0;
        while idx < answer.len() {
            let rr = answer[idx].clone();
            idx += 1;
            match rr.record_type() {
                RecordType::CNAME | RecordType::DNAME => {
                    let Some(target) = rr.data().chase_target() else {
                        continue;
                    };
                    if !chased.insert(target.clone()) {
                        continue;
                    }
                    self.glue(target, &mut answer, Some(qtype), Some(&mut authority));
                }
                RecordType::NS | RecordType::SOA | RecordType::MX | RecordType::SRV => {
                    if let Some(target) = rr.data().chase_target() {
                        self.glue(target, &mut additional, None, None);
                    }
                }
                _ => {}
            }
        }

        FindResult {
            answer,
            additional,
            authority,
        }
    }

    /// The core state machine: resolves `(name, type)` against this zone's
    /// records, delegation data and denial-of-existence chain.
    pub fn query(&self, name: &Name, qtype: RecordType) -> QueryResult {
        let zone = name.suffix(self.origin.label_count());
        let authoritative = zone == self.origin;

        let local = self.find(name, qtype);

        if !local.answer.is_empty() {
            if !authoritative {
                if qtype == RecordType::NS {
                    return QueryResult {
                        answer: self.get(name, RecordType::DS),
                        authority: local.answer,
                        additional: local.additional,
                        aa: false,
                        ok: true,
                    };
                }
                return QueryResult {
                    answer: Vec::new(),
                    authority: local.answer,
                    additional: local.additional,
                    aa: false,
                    ok: true,
                };
            }
            return QueryResult {
                answer: local.answer,
                authority: local.authority,
                additional: local.additional,
                aa: true,
                ok: true,
            };
        }

        if authoritative {
            let mut authority = self.get(&self.origin, RecordType::SOA);
            self.prove_no_data(&mut authority);
            return QueryResult {
                answer: Vec::new(),
                authority,
                additional: Vec::new(),
                aa: true,
                ok: false,
            };
        }

        let child = name.suffix(self.origin.label_count() + 1);
        let delegation = self.find(&child, RecordType::NS);
        if !delegation.answer.is_empty() {
            let mut authority = delegation.answer;
            authority.extend(self.get(&child, RecordType::DS));
            return QueryResult {
                answer: Vec::new(),
                authority,
                additional: delegation.additional,
                aa: false,
                ok: true,
            };
        }

        let mut authority = Vec::new();
        if self.origin == Name::root() {
            authority = self.get(&self.origin, RecordType::SOA);
            self.prove_name_error(&child, &mut authority);
        }
        QueryResult {
            answer: Vec::new(),
            authority,
            additional: Vec::new(),
            aa: false,
            ok: false,
        }
    }

    /// The public entry point: runs [`Self::query`] and assembles a [`Message`].
    ///
    /// `name` is assumed already lowercase — every `Name` in this crate is
    /// lowercased at construction, so there is nothing left to normalize here.
    /// `ANY` queries are answered as `NS` queries, a minimal-responses-style
    /// policy choice that discourages using this engine for amplification.
    pub fn resolve(&self, name: &Name, qtype: RecordType) -> Message {
        let effective_type = if qtype == RecordType::ANY {
            RecordType::NS
        } else {
            qtype
        };
        let result = self.query(name, effective_type);
        let code = if !result.aa && !result.ok {
            ResponseCode::NXDomain
        } else {
            ResponseCode::NoError
        };
        Message::new(
            code,
            result.aa,
            result.answer,
            result.authority,
            result.additional,
        )
    }

    /// Appends the origin's NSEC to `authority`, proving no RRset of the queried
    /// type exists at an otherwise-present name.
    pub fn prove_no_data(&self, authority: &mut Vec<Record>) {
        authority.extend(self.get(&self.origin, RecordType::NSEC));
    }

    /// Appends the NSEC covering `qname`'s absence — its canonical predecessor,
    /// if any, then the origin's own NSEC — to `authority`.
    pub fn prove_name_error(&self, qname: &Name, authority: &mut Vec<Record>) {
        match self.nsec.lower(qname) {
            Ok(Some(predecessor)) => {
                authority.extend(self.get(predecessor, RecordType::NSEC));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(%qname, error = %e, "NSEC predecessor lookup found qname already present");
            }
        }
        authority.extend(self.get(&self.origin, RecordType::NSEC));
    }

    /// Returns the lazily-initialized, process-wide root hints: `(NS-set,
    /// A/AAAA-set)`. See [`crate::hints`].
    pub fn get_hints(&self) -> (Vec<Record>, Vec<Record>) {
        hints::get_hints()
    }
}

fn now_unix() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rr::{RData, SOA};
    use std::net::Ipv4Addr;

    fn soa_record(origin: &Name) -> Record {
        Record::from_rdata(
            origin.clone(),
            3600,
            RData::SOA(SOA::new(
                Name::parse("ns1.example.").unwrap(),
                Name::parse("hostmaster.example.").unwrap(),
                1,
                3600,
                600,
                604800,
                3600,
            )),
        )
    }

    #[test]
    fn insert_rejects_out_of_zone_owner() {
        let mut zone = Zone::new(Name::parse("example.").unwrap());
        let err = zone
            .insert(Record::from_rdata(
                Name::parse("other.").unwrap(),
                3600,
                RData::NS(Name::parse("ns.other.").unwrap()),
            ))
            .unwrap_err();
        assert!(matches!(err, ZoneError::OutOfZone { .. }));
    }

    #[test]
    fn insert_allows_out_of_zone_glue() {
        let mut zone = Zone::new(Name::parse("example.").unwrap());
        zone.insert(Record::from_rdata(
            Name::parse("ns.other.").unwrap(),
            3600,
            RData::A(Ipv4Addr::new(9, 9, 9, 9)),
        ))
        .unwrap();
        assert!(zone.has(&Name::parse("ns.other.").unwrap(), RecordType::A));
    }

    #[test]
    fn s3_authoritative_soa_self_answer() {
        let origin = Name::parse(".").unwrap();
        let mut zone = Zone::new(origin.clone());
        zone.insert(soa_record(&origin)).unwrap();

        let result = zone.query(&origin, RecordType::SOA);
        assert!(result.aa);
        assert!(result.ok);
        assert_eq!(result.answer.len(), 1);
        assert_eq!(result.answer[0].record_type(), RecordType::SOA);
    }

    #[test]
    fn s1_referral_for_delegated_tld() {
        let origin = Name::parse(".").unwrap();
        let mut zone = Zone::new(origin.clone());
        zone.insert(soa_record(&origin)).unwrap();

        let com = Name::parse("com.").unwrap();
        let ns_name = Name::parse("a.gtld-servers.net.").unwrap();
        zone.insert(Record::from_rdata(com.clone(), 3600, RData::NS(ns_name.clone())))
            .unwrap();
        zone.insert(Record::from_rdata(
            com.clone(),
            3600,
            RData::DS(crate::rr::DS::new(1, 8, 2, vec![0xAB; 32])),
        ))
        .unwrap();
        zone.insert(Record::from_rdata(ns_name, 3600, RData::A(Ipv4Addr::new(192, 5, 6, 30))))
            .unwrap();

        let result = zone.query(&com, RecordType::NS);
        assert!(!result.aa);
        assert!(result.ok);
        assert_eq!(result.answer.len(), 1);
        assert_eq!(result.answer[0].record_type(), RecordType::DS);
        assert_eq!(result.authority.len(), 1);
        assert_eq!(result.authority[0].record_type(), RecordType::NS);
        assert_eq!(result.additional.len(), 1);
    }

    #[test]
    fn s2_nxdomain_at_root_carries_two_nsecs() {
        let origin = Name::parse(".").unwrap();
        let mut zone = Zone::new(origin.clone());
        zone.insert(soa_record(&origin)).unwrap();
        zone.insert(Record::from_rdata(
            origin.clone(),
            3600,
            RData::NSEC(crate::rr::NSEC::new(Name::parse("com.").unwrap(), vec![RecordType::NS])),
        ))
        .unwrap();
        zone.insert(Record::from_rdata(
            Name::parse("com.").unwrap(),
            3600,
            RData::NSEC(crate::rr::NSEC::new(origin.clone(), vec![RecordType::NS])),
        ))
        .unwrap();

        let result = zone.query(&Name::parse("example.invalid.").unwrap(), RecordType::A);
        assert!(!result.aa);
        assert!(!result.ok);
        // SOA + NSEC(predecessor = com.) + NSEC(origin)
        assert_eq!(result.authority.len(), 3);
    }

    #[test]
    fn s6_unresolved_cname_falls_back_to_soa() {
        let origin = Name::parse("example.").unwrap();
        let mut zone = Zone::new(origin.clone());
        zone.insert(soa_record(&origin)).unwrap();
        zone.insert(Record::from_rdata(
            Name::parse("a.example.").unwrap(),
            3600,
            RData::CNAME(Name::parse("nx.other.").unwrap()),
        ))
        .unwrap();

        let result = zone.query(&Name::parse("a.example.").unwrap(), RecordType::A);
        assert!(result.aa);
        assert_eq!(result.answer.len(), 1);
        assert_eq!(result.answer[0].record_type(), RecordType::CNAME);
        assert_eq!(result.authority.len(), 1);
        assert_eq!(result.authority[0].record_type(), RecordType::SOA);
    }

    #[test]
    fn s4_wildcard_answer_is_signed_on_the_fly() {
        let origin = Name::parse("example.").unwrap();
        let mut zone = Zone::new(origin.clone());
        zone.insert(soa_record(&origin)).unwrap();
        zone.insert(Record::from_rdata(
            Name::parse("*.example.").unwrap(),
            3600,
            RData::A(Ipv4Addr::new(1, 2, 3, 4)),
        ))
        .unwrap();
        // A fixed, arbitrary 32-byte Ed25519 seed, base64 encoded; not a real deployed key.
        zone.set_zsk_from_base64_seed("q83vZxjlszXzfQmKIuObdvmULHq/tJwoVoGH2+Y56+4=")
            .unwrap();

        let result = zone.query(&Name::parse("foo.example.").unwrap(), RecordType::A);
        assert!(result.aa);
        assert_eq!(result.answer.len(), 2);
        assert_eq!(result.answer[0].name(), &Name::parse("foo.example.").unwrap());
        assert_eq!(result.answer[1].record_type(), RecordType::RRSIG);
    }

    #[test]
    fn clear_records_keeps_signer_clear_drops_it() {
        let origin = Name::parse("example.").unwrap();
        let mut zone = Zone::new(origin.clone());
        zone.set_zsk_from_base64_seed("q83vZxjlszXzfQmKIuObdvmULHq/tJwoVoGH2+Y56+4=")
            .unwrap();
        assert!(zone.has(&origin, RecordType::DNSKEY));

        zone.clear_records();
        assert!(!zone.has(&origin, RecordType::DNSKEY));
        assert!(zone.signer.is_some());

        zone.clear();
        assert!(zone.signer.is_none());
    }
}

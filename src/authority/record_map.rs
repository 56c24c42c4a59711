// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Per-owner index of RRsets and their covering RRSIGs

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dnssec::ZoneSigner;
use crate::rr::{Name, Record, RecordType};

/// A single owner's records, grouped by type, with a parallel index of RRSIGs
/// grouped by the type they *cover* rather than their own type (`RRSIG`).
///
/// `Zone` keeps one `RecordMap` per exact owner name, plus exactly one more
/// holding every wildcard owner in the zone (see
/// [`crate::authority::Zone`] docs for why a single shared wildcard map is
/// enough). The spec this engine implements models a non-owning back-reference
/// from each `RecordMap` to its `Zone` so on-the-fly signing can reach the ZSK;
/// Rust has no safe, unarcified way to store a pointer back to an owner, so that
/// reference is passed as a borrowed parameter to [`Self::push`] instead — same
/// data, same lifetime relationship (the `Zone` always outlives the borrow),
/// just supplied at the call site rather than stored.
#[derive(Clone, Debug, Default)]
pub struct RecordMap {
    rrs: HashMap<RecordType, Vec<Record>>,
    sigs: HashMap<RecordType, Vec<Record>>,
}

impl RecordMap {
    /// Builds an empty record map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`. If it is an `RRSIG`, it is indexed under the type it
    /// covers rather than under `RecordType::RRSIG`. A no-op if an equal record
    /// is already present, so reinserting the same RR (e.g. a zone reload) does
    /// not double the stored RRset.
    pub fn insert(&mut self, record: Record) {
        let list = if let Some(rrsig) = record.data().as_rrsig() {
            self.sigs.entry(rrsig.type_covered()).or_default()
        } else {
            self.rrs.entry(record.record_type()).or_default()
        };
        if !list.contains(&record) {
            list.push(record);
        }
    }

    /// Central retrieval routine: finds the RRset answering `(qname, qtype)` at
    /// this owner and appends it, with covering signatures, to `out`.
    ///
    /// CNAME exclusivity (RFC 1912 §2.4) is enforced here, at read time: unless
    /// the query itself is for `CNAME`, a CNAME at this owner always wins over
    /// any other stored type, even if the caller also inserted other types here.
    ///
    /// `signer` is consulted only when no stored RRSIG covers the emitted type;
    /// this is what makes wildcard answers signable without precomputing a
    /// signature at every name a wildcard could ever be queried as.
    pub fn push(
        &self,
        qname: &Name,
        qtype: RecordType,
        out: &mut Vec<Record>,
        signer: Option<(&Name, &dyn ZoneSigner, u32, u32)>,
    ) {
        if qtype != RecordType::CNAME {
            if let Some(cname) = self.rrs.get(&RecordType::CNAME) {
                if let Some(matched) = filter_matches(qname, cname) {
                    self.emit(qname, RecordType::CNAME, &matched, out, signer);
                    return;
                }
            }
        }

        if let Some(candidates) = self.rrs.get(&qtype) {
            if let Some(matched) = filter_matches(qname, candidates) {
                self.emit(qname, qtype, &matched, out, signer);
            }
        }
    }

    fn emit(
        &self,
        qname: &Name,
        rrset_type: RecordType,
        matched: &[Record],
        out: &mut Vec<Record>,
        signer: Option<(&Name, &dyn ZoneSigner, u32, u32)>,
    ) {
        let start = out.len();
        out.extend(matched.iter().cloned());
        debug!(%qname, %rrset_type, count = matched.len(), "matched rrset");

        if let Some(sigs) = self.sigs.get(&rrset_type) {
            if let Some(matched_sigs) = filter_matches(qname, sigs) {
                out.extend(matched_sigs);
                return;
            }
        }

        if let Some((signer_name, signer, inception, expiration)) = signer {
            match signer.sign_rrset(signer_name, &out[start..], inception, expiration) {
                Ok(rrsig) => out.push(rrsig),
                Err(e) => warn!(%qname, %rrset_type, error = %e, "on-the-fly signing failed"),
            }
        }
    }

    /// Convenience wrapper around [`Self::push`]: builds and returns a fresh
    /// `Vec` rather than appending to a caller-supplied one.
    pub fn get(
        &self,
        qname: &Name,
        qtype: RecordType,
        signer: Option<(&Name, &dyn ZoneSigner, u32, u32)>,
    ) -> Vec<Record> {
        let mut out = Vec::new();
        self.push(qname, qtype, &mut out, signer);
        out
    }
}

/// Keeps only the candidate records whose owner matches `qname`: either the
/// owner is not a wildcard (the exact-owner table only ever holds records whose
/// owner already equals the query name, so this check is a no-op there and only
/// does real work for the shared wildcard map), or it is a wildcard `*.T` such
/// that `T`'s labels all match `qname`'s corresponding rightmost labels and
/// `qname` has strictly more labels than `*.T`. Matching records are returned
/// with their owner rewritten to `qname` when synthesized from a wildcard.
///
/// Returns `None` if nothing matches, so callers can distinguish "no answer"
/// from "empty answer".
fn filter_matches(qname: &Name, candidates: &[Record]) -> Option<Vec<Record>> {
    let mut matched = Vec::new();
    for record in candidates {
        let owner = record.name();
        if !owner.is_wildcard() {
            matched.push(record.clone());
            continue;
        }
        let suffix = owner.strip_wildcard();
        if qname.label_count() > suffix.label_count() && qname.is_subdomain_of(&suffix) {
            matched.push(record.with_name(qname.clone()));
        }
    }
    if matched.is_empty() {
        None
    } else {
        Some(matched)
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A single resource record: owner, type, class, ttl and rdata

use crate::rr::{DNSClass, Name, RData, RecordType};

/// A single DNS resource record.
///
/// `Record`s are immutable once built; the zone engine never mutates a stored
/// record in place, it only clones and rewrites the owner for wildcard synthesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: Name,
    dns_class: DNSClass,
    ttl: u32,
    data: RData,
}

impl Record {
    /// Builds a new record from its parts, canonicalizing the owner name and any
    /// embedded names in the rdata.
    pub fn from_rdata(name: Name, ttl: u32, data: RData) -> Self {
        Self {
            name,
            dns_class: DNSClass::IN,
            ttl,
            data: data.canonicalize(),
        }
    }

    /// The owner name of this record.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The record's class, always `IN` in this engine.
    pub fn dns_class(&self) -> DNSClass {
        self.dns_class
    }

    /// The record's time-to-live, in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// The record's type, derived from its rdata.
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// The record's data.
    pub fn data(&self) -> &RData {
        &self.data
    }

    /// Returns a copy of this record with its owner name replaced.
    ///
    /// Used to rewrite a wildcard owner (`*.example.`) to the queried name
    /// (`foo.example.`) when synthesizing a wildcard answer.
    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            dns_class: self.dns_class,
            ttl: self.ttl,
            data: self.data.clone(),
        }
    }

    /// Deep-clones this record. Implemented as an ordinary clone: every field here
    /// is already owned, so there is no separate shallow-clone representation to
    /// distinguish from.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Returns a canonicalized copy of this record (lowercase owner and embedded
    /// names). `Name` already enforces lowercasing at construction, so this exists
    /// purely to satisfy the external `canonicalize(record)` collaborator named in
    /// the zone engine's interface.
    pub fn canonical(&self) -> Self {
        self.clone()
    }
}

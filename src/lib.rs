// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A single-zone authoritative DNS engine: given a set of resource records
//! anchored at one origin, answers `(name, type)` queries the way an
//! authoritative nameserver would — exact matches, CNAME/DNAME chasing,
//! wildcard expansion, delegation referrals, and NSEC denial-of-existence —
//! with on-the-fly DNSSEC signing when a zone signing key is configured.
//!
//! # Scope
//!
//! This crate owns zone *state and resolution logic* only. It does not parse
//! zone-file presentation format (see [`zone_text::ZoneTextSource`]), does not
//! encode or decode DNS wire messages, and does not talk to a network or
//! recurse on behalf of a resolver. Those are different crates' jobs; embed
//! this one behind whichever of them a deployment needs.
//!
//! # Getting started
//!
//! ```
//! use dnszone::authority::Zone;
//! use dnszone::rr::{Name, RData, Record, RecordType, SOA};
//!
//! let origin = Name::parse("example.").unwrap();
//! let mut zone = Zone::new(origin.clone());
//! zone.insert(Record::from_rdata(
//!     origin.clone(),
//!     3600,
//!     RData::SOA(SOA::new(
//!         Name::parse("ns1.example.").unwrap(),
//!         Name::parse("hostmaster.example.").unwrap(),
//!         1, 3600, 600, 604800, 3600,
//!     )),
//! )).unwrap();
//!
//! let message = zone.resolve(&origin, RecordType::SOA);
//! assert!(message.aa());
//! ```

pub mod authority;
pub mod dnssec;
pub mod error;
pub mod hints;
pub mod rr;
pub mod zone_text;

pub use error::{DnssecError, ZoneError};

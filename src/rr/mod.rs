// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resource record primitives: names, types, rdata and records.
//!
//! This module stands in for the parts of a full DNS protocol crate that the
//! zone engine needs to compile and be tested against; wire encoding/decoding
//! and master-file parsing are out of scope (see the crate's top-level docs)
//! and are not implemented here.

mod dns_class;
mod name;
mod rdata;
mod record;
mod record_type;

pub use dns_class::DNSClass;
pub use name::Name;
pub use rdata::{DNSKEY, DS, MX, NSEC, RData, RRSIG, SOA, SRV};
pub use record::Record;
pub use record_type::{RecordType, ResponseCode};

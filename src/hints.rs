// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The process-wide root hints cache.
//!
//! A real deployment derives these records from a master-file (`named.root`-style)
//! zone text, via the master-file parser this crate treats as an external
//! collaborator (see the crate-level docs). Parsing that text is out of scope here,
//! so this module builds the equivalent records directly; the laziness and
//! write-once-effectively-immutable shape described in the surrounding
//! specification is what's being modeled, not the text format.

use std::net::Ipv4Addr;

use once_cell::sync::OnceCell;

use crate::rr::{Name, RData, Record};

static HINTS: OnceCell<(Vec<Record>, Vec<Record>)> = OnceCell::new();

/// Returns the lazily-initialized `(NS-set, A/AAAA-set)` root hints.
///
/// The first caller (from any thread) populates the cache; later callers, and
/// concurrent first-callers, all observe the same published value. Building the
/// hints twice on a race is harmless — the result is deterministic — so no extra
/// synchronization beyond `OnceCell`'s own is needed.
pub fn get_hints() -> (Vec<Record>, Vec<Record>) {
    HINTS.get_or_init(build_hints).clone()
}

fn build_hints() -> (Vec<Record>, Vec<Record>) {
    let root = Name::root();
    let a_root_net = Name::parse("a.root-servers.net.").expect("static root hint name");
    let b_root_net = Name::parse("b.root-servers.net.").expect("static root hint name");

    let ns = vec![
        Record::from_rdata(root.clone(), 518400, RData::NS(a_root_net.clone())),
        Record::from_rdata(root, 518400, RData::NS(b_root_net.clone())),
    ];
    let glue = vec![
        Record::from_rdata(a_root_net, 3600000, RData::A(Ipv4Addr::new(198, 41, 0, 4))),
        Record::from_rdata(b_root_net, 3600000, RData::A(Ipv4Addr::new(199, 9, 14, 201))),
    ];
    (ns, glue)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hints_are_stable_across_calls() {
        let (ns1, glue1) = get_hints();
        let (ns2, glue2) = get_hints();
        assert_eq!(ns1, ns2);
        assert_eq!(glue1, glue2);
        assert!(!ns1.is_empty());
        assert!(!glue1.is_empty());
    }
}

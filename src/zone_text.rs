// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The master-file parsing boundary.
//!
//! Parsing zone-file presentation format into records is explicitly out of
//! scope for this crate (see the crate-level docs): it is a large, separate
//! grammar better served by a dedicated library. [`ZoneTextSource`] is the seam
//! a caller plugs such a parser into; [`crate::authority::Zone::from_text`] and
//! [`crate::authority::Zone::from_file`] only know how to drive it.

use std::fs;
use std::path::Path;

use crate::authority::Zone;
use crate::error::ZoneError;
use crate::rr::{Name, Record};

/// An external master-file parser, supplied by the embedder.
pub trait ZoneTextSource {
    /// Parses `text` (the contents of a zone file for `origin`) into records.
    /// `file_name` is passed through only for error messages/diagnostics.
    fn parse(&self, text: &str, origin: &Name, file_name: Option<&str>) -> Result<Vec<Record>, ZoneError>;
}

impl Zone {
    /// Builds a zone from zone-file text, using `source` to parse it.
    pub fn from_text(
        origin: Name,
        text: &str,
        file_name: Option<&str>,
        source: &dyn ZoneTextSource,
    ) -> Result<Self, ZoneError> {
        let mut zone = Zone::new(origin.clone());
        for record in source.parse(text, &origin, file_name)? {
            zone.insert(record)?;
        }
        Ok(zone)
    }

    /// Builds a zone by reading `file` from disk and parsing it with `source`.
    pub fn from_file(origin: Name, file: &Path, source: &dyn ZoneTextSource) -> Result<Self, ZoneError> {
        let text = fs::read_to_string(file).map_err(|e| ZoneError::ZoneText(e.to_string()))?;
        Zone::from_text(origin, &text, file.to_str(), source)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rr::{RData, RecordType};
    use std::net::Ipv4Addr;

    struct StubSource;

    impl ZoneTextSource for StubSource {
        fn parse(&self, _text: &str, origin: &Name, _file_name: Option<&str>) -> Result<Vec<Record>, ZoneError> {
            Ok(vec![Record::from_rdata(
                origin.clone(),
                3600,
                RData::A(Ipv4Addr::new(127, 0, 0, 1)),
            )])
        }
    }

    #[test]
    fn from_text_drives_the_supplied_parser() {
        let origin = Name::parse("example.").unwrap();
        let zone = Zone::from_text(origin.clone(), "unused", None, &StubSource).unwrap();
        assert!(zone.has(&origin, RecordType::A));
    }
}

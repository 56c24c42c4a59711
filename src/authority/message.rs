// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A minimal response envelope: the three section lists plus the flags `resolve`
//! assembles them under. This is not a wire message — encoding/decoding a full DNS
//! packet (header counts, EDNS, compression) is out of scope for this crate; see
//! the crate-level docs.

use crate::rr::{Record, ResponseCode};

/// The response `Zone::resolve` builds from a [`super::Zone::query`] result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    code: ResponseCode,
    aa: bool,
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

impl Message {
    /// Builds a message from its parts.
    pub fn new(
        code: ResponseCode,
        aa: bool,
        answer: Vec<Record>,
        authority: Vec<Record>,
        additional: Vec<Record>,
    ) -> Self {
        Self {
            code,
            aa,
            answer,
            authority,
            additional,
        }
    }

    /// The response code: `NOERROR` or `NXDOMAIN`.
    pub fn code(&self) -> ResponseCode {
        self.code
    }

    /// The authoritative-answer flag.
    pub fn aa(&self) -> bool {
        self.aa
    }

    /// The answer section.
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// The authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// The additional (glue) section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Error types for the zone engine

use thiserror::Error;

use crate::rr::Name;

/// Errors raised while building or querying a [`crate::authority::Zone`]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum ZoneError {
    /// A record was inserted whose owner does not fall under the zone's origin
    #[error("{name} is not a subdomain of zone origin {origin}")]
    OutOfZone {
        /// the offending owner name
        name: Name,
        /// the zone's origin
        origin: Name,
    },

    /// A name handed to a name-list predecessor lookup was not absent from the list
    ///
    /// [`crate::authority::NameList::lower`] is only meaningful for names that are
    /// provably absent from the zone; calling it with a name that is present
    /// indicates the caller should have taken the no-data path instead of the
    /// name-error path.
    #[error("{0} is present in the zone; NSEC predecessor lookup only applies to NXDOMAIN names")]
    NotAnNXDomain(Name),

    /// The zone's origin itself was malformed (not a fully-qualified name)
    #[error("{0} is not a fully qualified domain name")]
    NotFQDN(String),

    /// Reading or parsing zone text (e.g. via `Zone::from_file`) failed
    #[error("failed to load zone text: {0}")]
    ZoneText(String),
}

/// Errors raised by the DNSSEC signing collaborator
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DnssecError {
    /// The private key material handed to [`crate::dnssec::Ed25519Signer::from_base64_seed`]
    /// could not be decoded
    #[error("failed to decode private key material: {0}")]
    KeyDecodeFailure(String),

    /// The cryptographic backend rejected the key or refused to produce a signature
    #[error("signing backend error: {0}")]
    SigningFailure(String),
}

// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The DNSSEC signing collaborator.
//!
//! The zone engine's specification treats key decoding, signature generation and
//! canonical RRset ordering as an external module: a real deployment would plug in
//! a full DNSSEC stack (key storage, rollover policy, multiple algorithms). This
//! module supplies one small, concrete implementation of that collaborator —
//! Ed25519 only, no verification, no rotation — so [`crate::authority::Zone`]'s
//! on-the-fly signing path has something real to call, behind the [`ZoneSigner`]
//! trait so it can be swapped out wholesale.

mod signer;
mod wire;

pub use signer::Ed25519Signer;

use crate::rr::{DNSKEY, Name, Record};
use crate::error::DnssecError;

/// The zone-signing-key collaborator `Zone` delegates to for DNSKEY construction
/// and on-the-fly RRSIG synthesis.
pub trait ZoneSigner: Send + Sync {
    /// The DNSSEC algorithm number this signer produces signatures for.
    fn algorithm(&self) -> u8;

    /// Builds this signer's `DNSKEY` rdata (the `ZONE` flag is always set; this
    /// module only produces zone signing keys, never key signing keys).
    fn dnskey(&self) -> DNSKEY;

    /// Signs `rrset`, whose records must all share one owner name, type and TTL,
    /// producing an `RRSIG` record covering it.
    ///
    /// `signer_name` is the owner of the `DNSKEY` (normally the zone origin).
    /// `inception`/`expiration` are seconds since the Unix epoch; the caller
    /// supplies them since this module does not read the system clock.
    fn sign_rrset(
        &self,
        signer_name: &Name,
        rrset: &[Record],
        inception: u32,
        expiration: u32,
    ) -> Result<Record, DnssecError>;
}

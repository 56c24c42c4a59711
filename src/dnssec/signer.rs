// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! An Ed25519 [`ZoneSigner`], the one concrete implementation this crate ships.

use ring::signature::{Ed25519KeyPair, KeyPair};

use crate::dnssec::wire::{name_to_wire, rdata_to_wire, record_to_wire};
use crate::dnssec::ZoneSigner;
use crate::error::DnssecError;
use crate::rr::{DNSKEY, Name, RData, RRSIG, Record};

/// DNSSEC algorithm number for Ed25519, [RFC 8080](https://www.rfc-editor.org/rfc/rfc8080).
const ALGORITHM_ED25519: u8 = 15;

/// A zone signing key using Ed25519, backed by `ring`.
pub struct Ed25519Signer {
    keypair: Ed25519KeyPair,
    public_key: Vec<u8>,
}

impl Ed25519Signer {
    /// Decodes a base64-encoded 32-byte Ed25519 seed into a signer.
    ///
    /// This stands in for the external `dnssec.decodePrivate(str)` collaborator
    /// named in the zone engine's interface.
    pub fn from_base64_seed(seed: &str) -> Result<Self, DnssecError> {
        let seed_bytes = data_encoding::BASE64
            .decode(seed.as_bytes())
            .map_err(|e| DnssecError::KeyDecodeFailure(e.to_string()))?;
        let keypair = Ed25519KeyPair::from_seed_unchecked(&seed_bytes)
            .map_err(|e| DnssecError::KeyDecodeFailure(e.to_string()))?;
        let public_key = keypair.public_key().as_ref().to_vec();
        Ok(Self { keypair, public_key })
    }
}

impl ZoneSigner for Ed25519Signer {
    fn algorithm(&self) -> u8 {
        ALGORITHM_ED25519
    }

    fn dnskey(&self) -> DNSKEY {
        DNSKEY::new(true, false, ALGORITHM_ED25519, self.public_key.clone())
    }

    fn sign_rrset(
        &self,
        signer_name: &Name,
        rrset: &[Record],
        inception: u32,
        expiration: u32,
    ) -> Result<Record, DnssecError> {
        let first = rrset
            .first()
            .ok_or_else(|| DnssecError::SigningFailure("cannot sign an empty rrset".into()))?;
        let owner = first.name().clone();
        let type_covered = first.record_type();
        let original_ttl = first.ttl();
        let key_tag = self.dnskey().key_tag();
        let labels = owner.label_count() as u8;

        let rrsig_header = RRSIG::new(
            type_covered,
            self.algorithm(),
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name.clone(),
            Vec::new(),
        );

        let mut message = Vec::new();
        encode_rrsig_rdata_without_signature(&rrsig_header, &mut message);

        let mut ordered: Vec<&Record> = rrset.iter().collect();
        ordered.sort_by(|a, b| rrset_rdata_wire(a).cmp(&rrset_rdata_wire(b)));
        for record in ordered {
            record_to_wire(record, original_ttl, &mut message);
        }

        let signature = self.keypair.sign(&message).as_ref().to_vec();

        let rrsig = RRSIG::new(
            type_covered,
            self.algorithm(),
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name.clone(),
            signature,
        );
        Ok(Record::from_rdata(owner, original_ttl, RData::RRSIG(rrsig)))
    }
}

fn encode_rrsig_rdata_without_signature(rrsig: &RRSIG, out: &mut Vec<u8>) {
    out.extend_from_slice(&rrsig.type_covered().to_u16().to_be_bytes());
    out.push(rrsig.algorithm());
    out.push(rrsig.labels());
    out.extend_from_slice(&rrsig.original_ttl().to_be_bytes());
    out.extend_from_slice(&rrsig.expiration().to_be_bytes());
    out.extend_from_slice(&rrsig.inception().to_be_bytes());
    out.extend_from_slice(&rrsig.key_tag().to_be_bytes());
    name_to_wire(rrsig.signer_name(), out);
}

fn rrset_rdata_wire(record: &Record) -> Vec<u8> {
    let mut buf = Vec::new();
    rdata_to_wire(record.data(), &mut buf);
    buf
}

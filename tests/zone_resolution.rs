// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! End-to-end resolution scenarios against a `Zone` built directly from
//! in-memory records, exercising referral, NXDOMAIN, wildcard signing and
//! CNAME chasing the way a real authoritative server's callers would see them.

use std::net::Ipv4Addr;

use dnszone::authority::Zone;
use dnszone::rr::{DS, NSEC, RData, Record, RecordType, ResponseCode, SOA};
use dnszone::rr::Name;

const ZSK_SEED: &str = "q83vZxjlszXzfQmKIuObdvmULHq/tJwoVoGH2+Y56+4=";

fn name(s: &str) -> Name {
    Name::parse(s).unwrap()
}

fn soa_at(origin: &Name) -> Record {
    Record::from_rdata(
        origin.clone(),
        3600,
        RData::SOA(SOA::new(
            name("ns1.example."),
            name("hostmaster.example."),
            2024010100,
            3600,
            600,
            604800,
            3600,
        )),
    )
}

fn root_zone_with_com_delegation() -> Zone {
    let root = Name::root();
    let mut zone = Zone::new(root.clone());
    zone.insert(soa_at(&root)).unwrap();
    zone.insert(Record::from_rdata(
        root.clone(),
        518400,
        RData::NSEC(NSEC::new(name("com."), vec![RecordType::NS, RecordType::SOA])),
    ))
    .unwrap();
    zone.insert(Record::from_rdata(
        name("com."),
        518400,
        RData::NSEC(NSEC::new(root.clone(), vec![RecordType::NS])),
    ))
    .unwrap();

    zone.insert(Record::from_rdata(
        name("com."),
        172800,
        RData::NS(name("a.gtld-servers.net.")),
    ))
    .unwrap();
    zone.insert(Record::from_rdata(
        name("com."),
        86400,
        RData::DS(DS::new(30909, 8, 2, vec![0x12; 32])),
    ))
    .unwrap();
    zone.insert(Record::from_rdata(
        name("a.gtld-servers.net."),
        172800,
        RData::A(Ipv4Addr::new(192, 5, 6, 30)),
    ))
    .unwrap();

    zone
}

#[test]
fn s1_referral_for_delegated_tld() {
    let zone = root_zone_with_com_delegation();
    let message = zone.resolve(&name("com."), RecordType::NS);

    assert!(!message.aa());
    assert_eq!(message.code(), ResponseCode::NoError);
    assert!(message.answer().is_empty());
    assert_eq!(message.authority().len(), 1);
    assert_eq!(message.authority()[0].record_type(), RecordType::NS);
    assert_eq!(message.additional().len(), 1);
    assert_eq!(message.additional()[0].record_type(), RecordType::A);
}

#[test]
fn s1_variant_non_ns_query_below_delegation_lands_in_authority() {
    // Querying the delegation point for something other than NS (here DS)
    // surfaces the found records in the authority slot per the documented
    // authority-slot overload for `!authority && type != NS`.
    let zone = root_zone_with_com_delegation();
    let message = zone.resolve(&name("com."), RecordType::DS);

    assert!(!message.aa());
    assert!(message.answer().is_empty());
    assert_eq!(message.authority().len(), 1);
    assert_eq!(message.authority()[0].record_type(), RecordType::DS);
}

#[test]
fn s2_nxdomain_at_root_for_unknown_tld() {
    let zone = root_zone_with_com_delegation();
    let message = zone.resolve(&name("example.invalid."), RecordType::A);

    assert!(!message.aa());
    assert_eq!(message.code(), ResponseCode::NXDomain);
    // SOA + NSEC(predecessor = com.) + NSEC(origin = .)
    assert_eq!(message.authority().len(), 3);
    assert_eq!(message.authority()[0].record_type(), RecordType::SOA);
    assert_eq!(message.authority()[1].record_type(), RecordType::NSEC);
    assert_eq!(message.authority()[2].record_type(), RecordType::NSEC);
}

#[test]
fn s3_authoritative_soa_self_answer() {
    let zone = root_zone_with_com_delegation();
    let message = zone.resolve(&Name::root(), RecordType::SOA);

    assert!(message.aa());
    assert_eq!(message.code(), ResponseCode::NoError);
    assert_eq!(message.answer().len(), 1);
    assert_eq!(message.answer()[0].record_type(), RecordType::SOA);
}

#[test]
fn s4_wildcard_answer_is_signed_on_the_fly() {
    let origin = name("example.");
    let mut zone = Zone::new(origin.clone());
    zone.insert(soa_at(&origin)).unwrap();
    zone.insert(Record::from_rdata(
        name("*.example."),
        3600,
        RData::A(Ipv4Addr::new(1, 2, 3, 4)),
    ))
    .unwrap();
    zone.set_zsk_from_base64_seed(ZSK_SEED).unwrap();

    let message = zone.resolve(&name("foo.example."), RecordType::A);

    assert!(message.aa());
    assert_eq!(message.answer().len(), 2);
    assert_eq!(message.answer()[0].name(), &name("foo.example."));
    assert_eq!(message.answer()[0].record_type(), RecordType::A);
    assert_eq!(message.answer()[1].record_type(), RecordType::RRSIG);
}

#[test]
fn s5_cname_chase_succeeds() {
    let origin = name("example.");
    let mut zone = Zone::new(origin.clone());
    zone.insert(soa_at(&origin)).unwrap();
    zone.insert(Record::from_rdata(
        name("a.example."),
        3600,
        RData::CNAME(name("b.example.")),
    ))
    .unwrap();
    zone.insert(Record::from_rdata(
        name("b.example."),
        3600,
        RData::A(Ipv4Addr::new(5, 6, 7, 8)),
    ))
    .unwrap();

    let message = zone.resolve(&name("a.example."), RecordType::A);

    assert!(message.aa());
    assert_eq!(message.answer().len(), 2);
    assert_eq!(message.answer()[0].record_type(), RecordType::CNAME);
    assert_eq!(message.answer()[1].record_type(), RecordType::A);
    assert!(message.authority().is_empty());
}

#[test]
fn s6_cname_chase_fails_falls_back_to_soa() {
    let origin = name("example.");
    let mut zone = Zone::new(origin.clone());
    zone.insert(soa_at(&origin)).unwrap();
    zone.insert(Record::from_rdata(
        name("a.example."),
        3600,
        RData::CNAME(name("nx.other.")),
    ))
    .unwrap();

    let message = zone.resolve(&name("a.example."), RecordType::A);

    assert!(message.aa());
    assert_eq!(message.answer().len(), 1);
    assert_eq!(message.answer()[0].record_type(), RecordType::CNAME);
    assert_eq!(message.authority().len(), 1);
    assert_eq!(message.authority()[0].record_type(), RecordType::SOA);
}

#[test]
fn cname_exclusivity_shadows_other_types_even_if_both_are_inserted() {
    let origin = name("example.");
    let mut zone = Zone::new(origin.clone());
    zone.insert(soa_at(&origin)).unwrap();
    zone.insert(Record::from_rdata(
        name("a.example."),
        3600,
        RData::CNAME(name("b.example.")),
    ))
    .unwrap();
    zone.insert(Record::from_rdata(
        name("a.example."),
        3600,
        RData::A(Ipv4Addr::new(9, 9, 9, 9)),
    ))
    .unwrap();

    let records = zone.get(&name("a.example."), RecordType::A);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type(), RecordType::CNAME);
}

#[test]
fn authoritative_nodata_carries_soa_and_origin_nsec() {
    let origin = name("example.");
    let mut zone = Zone::new(origin.clone());
    zone.insert(soa_at(&origin)).unwrap();
    zone.insert(Record::from_rdata(
        origin.clone(),
        3600,
        RData::NSEC(NSEC::new(name("www.example."), vec![RecordType::SOA, RecordType::NS])),
    ))
    .unwrap();

    let message = zone.resolve(&origin, RecordType::MX);

    assert!(message.aa());
    assert_eq!(message.code(), ResponseCode::NoError);
    assert!(message.answer().is_empty());
    assert_eq!(message.authority().len(), 2);
    assert_eq!(message.authority()[0].record_type(), RecordType::SOA);
    assert_eq!(message.authority()[1].record_type(), RecordType::NSEC);
}

#[test]
fn any_query_is_answered_as_ns() {
    let zone = root_zone_with_com_delegation();
    let as_any = zone.resolve(&name("com."), RecordType::ANY);
    let as_ns = zone.resolve(&name("com."), RecordType::NS);
    assert_eq!(as_any, as_ns);
}

#[test]
fn out_of_zone_insert_is_rejected() {
    let mut zone = Zone::new(name("example."));
    let err = zone
        .insert(Record::from_rdata(
            name("other."),
            3600,
            RData::NS(name("ns.other.")),
        ))
        .unwrap_err();
    assert!(matches!(err, dnszone::ZoneError::OutOfZone { .. }));
}

#[test]
fn glue_for_out_of_zone_nameservers_is_still_accepted() {
    let mut zone = Zone::new(name("example."));
    zone.insert(Record::from_rdata(
        name("ns.elsewhere."),
        3600,
        RData::A(Ipv4Addr::new(203, 0, 113, 9)),
    ))
    .unwrap();
    assert!(zone.has(&name("ns.elsewhere."), RecordType::A));
}

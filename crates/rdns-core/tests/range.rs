use rdns_core::{AddressRange, AddressValue, ParseError, parse};

fn texts(range: AddressRange) -> Vec<String> {
    range.map(|addr| addr.to_string()).collect()
}

#[test]
fn range_walks_across_octet_boundary() {
    let range = AddressRange::parse("192.0.2.254", Some("192.0.3.1")).unwrap();
    assert_eq!(range.size_hint(), (4, Some(4)));
    assert_eq!(
        texts(range),
        ["192.0.2.254", "192.0.2.255", "192.0.3.0", "192.0.3.1"]
    );
}

#[test]
fn range_ending_at_v4_max_terminates() {
    let range = AddressRange::parse("255.255.255.253", Some("255.255.255.255")).unwrap();
    assert_eq!(
        texts(range),
        ["255.255.255.253", "255.255.255.254", "255.255.255.255"]
    );
}

#[test]
fn range_ending_at_v6_max_terminates() {
    let end = AddressValue::V6([0xff; 16]);
    let start = end.decrement().unwrap();
    let range = AddressRange::new(start, end).unwrap();
    assert_eq!(
        texts(range),
        [
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        ]
    );
}

#[test]
fn v6_range_steps_through_compressed_forms() {
    let range = AddressRange::parse("2001:db8::ffff", Some("2001:db8::1:1")).unwrap();
    assert_eq!(
        texts(range),
        ["2001:db8::ffff", "2001:db8::1:0", "2001:db8::1:1"]
    );
}

#[test]
fn range_yields_values_in_ascending_order() {
    let range = AddressRange::parse("10.0.0.250", Some("10.0.1.5")).unwrap();
    let values: Vec<AddressValue> = range.collect();
    assert_eq!(values.len(), 12);
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(values.first(), Some(&parse("10.0.0.250").unwrap()));
    assert_eq!(values.last(), Some(&parse("10.0.1.5").unwrap()));
}

#[test]
fn range_errors_are_typed() {
    assert_eq!(
        AddressRange::parse("::2", Some("::1")).unwrap_err(),
        ParseError::ReversedRange
    );
    assert!(matches!(
        AddressRange::parse("::1", Some("10.0.0.1")),
        Err(ParseError::FamilyMismatch { .. })
    ));
    assert_eq!(
        AddressRange::parse("localhost", None).unwrap_err(),
        ParseError::UnknownFamily
    );
}

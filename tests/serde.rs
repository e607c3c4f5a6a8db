#![cfg(feature = "serde")]

use sip_uri::Uri;

#[test]
fn serializes_canonical_string() {
    let u = Uri::parse("sip:alice@example.com:5060;transport=udp").unwrap();
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        "\"sip:alice@example.com:5060;transport=udp\""
    );
}

#[test]
fn round_trips_through_json() {
    let u = Uri::parse("sips:bob@[2001:db8::7]:5061?subject=project%20x").unwrap();
    let json = serde_json::to_string(&u).unwrap();
    let v: Uri = serde_json::from_str(&json).unwrap();
    assert_eq!(u, v);
}

#[test]
fn rejects_invalid_strings() {
    assert!(serde_json::from_str::<Uri>("\"no-scheme-here\"").is_err());
    assert!(serde_json::from_str::<Uri>("42").is_err());
}

use sip_uri::encoding::{table, *};
use sip_uri::ParseErrorKind;

#[test]
fn class_reserved_sets() {
    // user-unreserved = "&=+$,;?/"; "@" and ":" must be escaped.
    assert_eq!(escape_user("alice&=+$,;?/"), "alice&=+$,;?/");
    assert_eq!(escape_user("sip:alice@atlanta"), "sip%3Aalice%40atlanta");

    // password drops ";", "?" and "/" from the user set.
    assert_eq!(escape_password("p&=+$,"), "p&=+$,");
    assert_eq!(escape_password("a;b?c/d"), "a%3Bb%3Fc%2Fd");

    // param-unreserved = "[]/:&+$"; "=" and ";" must be escaped.
    assert_eq!(escape_param("[v6]:5060/path&+$"), "[v6]:5060/path&+$");
    assert_eq!(escape_param("x=1;y"), "x%3D1%3By");

    // hnv-unreserved = "[]/?:+$"; "&" and "=" must be escaped.
    assert_eq!(escape_header("[v6]/?:+$"), "[v6]/?:+$");
    assert_eq!(escape_header("a&b=c"), "a%26b%3Dc");

    // mark = "-_.!~*'()" stays unescaped in every class.
    assert_eq!(escape_user("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(escape_password("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(escape_param("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(escape_header("-_.!~*'()"), "-_.!~*'()");
}

#[test]
fn escape_is_uppercase_hex() {
    assert_eq!(escape_user(" "), "%20");
    assert_eq!(escape_param("\u{e9}"), "%C3%A9");
    assert_eq!(escape_header([0x0a, 0xff].as_slice()), "%0A%FF");
}

#[test]
fn unescape_inverse() {
    // unescape(escape(s)) == s, for text and for opaque bytes.
    let texts = ["", "alice", "sip:alice@atlanta.com;transport=tcp?x=1", "snowman \u{2603}"];
    for s in texts {
        assert_eq!(unescape_user(&escape_user(s)).unwrap(), s.as_bytes());
        assert_eq!(unescape_password(&escape_password(s)).unwrap(), s.as_bytes());
        assert_eq!(unescape_param(&escape_param(s)).unwrap(), s.as_bytes());
        assert_eq!(unescape_header(&escape_header(s)).unwrap(), s.as_bytes());
    }

    let bytes = [0x00, 0x25, 0x7f, 0x80, 0xff];
    assert_eq!(
        unescape_user(&escape_user(bytes.as_slice())).unwrap(),
        bytes
    );
}

#[test]
fn unescape_accepts_both_hex_cases() {
    assert_eq!(unescape_param("%2f").unwrap(), b"/");
    assert_eq!(unescape_param("%2F").unwrap(), b"/");
}

#[test]
fn unescape_rejects_bad_octets() {
    let e = unescape_user("abc%4").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
    assert_eq!(e.index(), 3);

    let e = unescape_header("%zz").unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);
    assert_eq!(e.index(), 0);

    let e = unescape_password("trailing%").unwrap_err();
    assert_eq!(e.index(), 8);

    assert_eq!(
        e.to_string(),
        "invalid percent-encoded octet at index 8"
    );
}

#[test]
fn tables_match_classes() {
    assert!(table::USER.allows(b';'));
    assert!(table::USER.allows(b'?'));
    assert!(!table::USER.allows(b'@'));
    assert!(!table::USER.allows(b':'));

    assert!(table::PASSWORD.allows(b','));
    assert!(!table::PASSWORD.allows(b';'));

    assert!(table::PARAM.allows(b':'));
    assert!(!table::PARAM.allows(b'='));

    assert!(table::HEADER.allows(b'?'));
    assert!(!table::HEADER.allows(b'&'));

    // "%" always escapes, in every class.
    for t in [table::USER, table::PASSWORD, table::PARAM, table::HEADER] {
        assert!(!t.allows(b'%'));
    }
    assert_eq!(escape_user("100%"), "100%25");
}

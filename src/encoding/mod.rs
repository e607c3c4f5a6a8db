//! Per-component percent-escaping.
//!
//! RFC 3261 reserves a different character set for each URI component
//! class, so each class gets its own escape/unescape pair: [`escape_user`],
//! [`escape_password`], [`escape_param`] and [`escape_header`] keep exactly
//! the bytes the corresponding [`table`] constant allows and escape the
//! rest as uppercase `%XX` triplets. The unescape direction is uniform
//! across classes; the per-class functions exist so call sites document
//! which component they operate on.
//!
//! All functions are pure and allocate their result; none of them
//! aliases into the input. Escaping is never applied implicitly by
//! [`Uri::parse`] or the canonical encoder: components are stored and
//! written exactly as given.
//!
//! [`Uri::parse`]: crate::Uri::parse

pub mod table;

use crate::error::{ParseError, ParseErrorKind};
use table::Table;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Escapes a byte sequence with the given table.
///
/// Bytes the table allows are copied through; all others become
/// uppercase `%XX` triplets. The output is always ASCII.
pub fn escape<S: AsRef<[u8]> + ?Sized>(s: &S, table: &Table) -> String {
    let s = s.as_ref();
    let mut buf = String::with_capacity(s.len());
    for &x in s {
        table.escape(x, &mut buf);
    }
    buf
}

/// Unescapes a percent-encoded byte sequence.
///
/// Both hexadecimal cases are accepted. A `%` that is not followed by
/// two hexadecimal digits fails with [`ParseErrorKind::InvalidOctet`]
/// at the index of the `%`.
pub fn unescape<S: AsRef<[u8]> + ?Sized>(s: &S) -> Result<Vec<u8>, ParseError> {
    let s = s.as_ref();
    let mut buf = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let x = s[i];
        if x == b'%' {
            if i + 2 >= s.len() {
                return Err(ParseError {
                    index: i,
                    kind: ParseErrorKind::InvalidOctet,
                });
            }
            match decode_octet(s[i + 1], s[i + 2]) {
                Some(octet) => buf.push(octet),
                None => {
                    return Err(ParseError {
                        index: i,
                        kind: ParseErrorKind::InvalidOctet,
                    })
                }
            }
            i += 3;
        } else {
            buf.push(x);
            i += 1;
        }
    }
    Ok(buf)
}

/// Escapes the user component of a URI.
///
/// # Examples
///
/// ```
/// use sip_uri::encoding::escape_user;
///
/// // "&=+$,;?/" need no escaping in a user, "@" and ":" do.
/// assert_eq!(escape_user("alice;day=tue"), "alice;day=tue");
/// assert_eq!(escape_user("sip:alice@atlanta"), "sip%3Aalice%40atlanta");
/// ```
pub fn escape_user<S: AsRef<[u8]> + ?Sized>(s: &S) -> String {
    escape(s, table::USER)
}

/// Unescapes the user component of a URI.
pub fn unescape_user<S: AsRef<[u8]> + ?Sized>(s: &S) -> Result<Vec<u8>, ParseError> {
    unescape(s)
}

/// Escapes the password component of a URI.
pub fn escape_password<S: AsRef<[u8]> + ?Sized>(s: &S) -> String {
    escape(s, table::PASSWORD)
}

/// Unescapes the password component of a URI.
pub fn unescape_password<S: AsRef<[u8]> + ?Sized>(s: &S) -> Result<Vec<u8>, ParseError> {
    unescape(s)
}

/// Escapes a URI parameter name or value.
pub fn escape_param<S: AsRef<[u8]> + ?Sized>(s: &S) -> String {
    escape(s, table::PARAM)
}

/// Unescapes a URI parameter name or value.
pub fn unescape_param<S: AsRef<[u8]> + ?Sized>(s: &S) -> Result<Vec<u8>, ParseError> {
    unescape(s)
}

/// Escapes a URI header name or value.
pub fn escape_header<S: AsRef<[u8]> + ?Sized>(s: &S) -> String {
    escape(s, table::HEADER)
}

/// Unescapes a URI header name or value.
pub fn unescape_header<S: AsRef<[u8]> + ?Sized>(s: &S) -> Result<Vec<u8>, ParseError> {
    unescape(s)
}

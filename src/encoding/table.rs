//! Byte class tables from RFC 3261.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [Section 25.1, RFC 3261][1].
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc3261/#section-25.1

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 0b1111];
        i += 1;
    }
    out
}

const HEX_TABLE: &[u8; 512] = &gen_hex_table();

/// A table determining the bytes a component class may hold unescaped.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [bool; 256],
}

impl Table {
    /// Generates a table that only allows the given unescaped bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes equals `b'%'`.
    pub const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            assert!(*cur != b'%', "cannot allow unescaped %");
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// either by `self` or by `other`.
    pub const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the given byte may appear unescaped.
    #[inline]
    pub const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }

    /// Appends the byte to the buffer, escaped as an uppercase
    /// `%XX` triplet unless the table allows it unescaped.
    #[inline]
    pub(crate) fn escape(&self, x: u8, buf: &mut String) {
        if self.allows(x) {
            buf.push(x as char);
        } else {
            buf.push('%');
            buf.push(HEX_TABLE[x as usize * 2] as char);
            buf.push(HEX_TABLE[x as usize * 2 + 1] as char);
        }
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub const DIGIT: &Table = &gen(b"0123456789");

/// alphanum = ALPHA / DIGIT
pub const ALPHANUM: &Table = &ALPHA.or(DIGIT);

/// mark = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"
pub const MARK: &Table = &gen(b"-_.!~*'()");

/// unreserved = alphanum / mark
pub const UNRESERVED: &Table = &ALPHANUM.or(MARK);

/// user = 1*( unreserved / escaped / user-unreserved )
///
/// user-unreserved = "&" / "=" / "+" / "$" / "," / ";" / "?" / "/"
pub const USER: &Table = &UNRESERVED.or(&gen(b"&=+$,;?/"));

/// password = *( unreserved / escaped / "&" / "=" / "+" / "$" / "," )
pub const PASSWORD: &Table = &UNRESERVED.or(&gen(b"&=+$,"));

/// paramchar = param-unreserved / unreserved / escaped
///
/// param-unreserved = "[" / "]" / "/" / ":" / "&" / "+" / "$"
pub const PARAM: &Table = &UNRESERVED.or(&gen(b"[]/:&+$"));

/// hname / hvalue = *( hnv-unreserved / unreserved / escaped )
///
/// hnv-unreserved = "[" / "]" / "/" / "?" / ":" / "+" / "$"
pub const HEADER: &Table = &UNRESERVED.or(&gen(b"[]/?:+$"));

use crate::error::{ParseError, ParseErrorKind};
use crate::{AddrFamily, Uri};
use std::net::Ipv4Addr;

fn err<T>(index: usize, kind: ParseErrorKind) -> Result<T, ParseError> {
    Err(ParseError { index, kind })
}

fn nonempty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

/// Decodes `scheme:[user[:password]@]host[:port][;params][?headers]`.
///
/// Error indexes refer to byte positions in the full input.
pub(crate) fn parse(s: &str) -> Result<Uri, ParseError> {
    // Scheme runs up to the first ":" and must be non-empty.
    let colon = match s.find(':') {
        Some(0) | None => return err(0, ParseErrorKind::NoScheme),
        Some(i) => i,
    };
    let scheme = &s[..colon];
    let rest = &s[colon + 1..];
    let mut pos = colon + 1;

    // Everything before the first "@" is userinfo. The user part may
    // legally hold ";" and "?" unescaped, so the split must happen
    // before the params/headers runs are delimited.
    let (user, password, hp) = match rest.find('@') {
        Some(at) => {
            let userinfo = &rest[..at];
            let (user, password) = match userinfo.split_once(':') {
                Some((u, p)) => (u, p),
                None => (userinfo, ""),
            };
            pos += at + 1;
            (nonempty(user), nonempty(password), &rest[at + 1..])
        }
        None => (None, None, rest),
    };

    // Host is delimited, not validated. Brackets mark an IPv6 literal
    // and are stripped; the family tag is informational only.
    let (host, addr_family, host_len) = if hp.starts_with('[') {
        match hp.find(']') {
            Some(end) => (&hp[1..end], AddrFamily::Ipv6, end + 1),
            None => return err(pos, ParseErrorKind::UnclosedBracket),
        }
    } else {
        let end = hp
            .find(|c| matches!(c, ':' | ';' | '?'))
            .unwrap_or(hp.len());
        let host = &hp[..end];
        let addr_family = if host.parse::<Ipv4Addr>().is_ok() {
            AddrFamily::Ipv4
        } else {
            AddrFamily::Unspec
        };
        (host, addr_family, end)
    };
    if host.is_empty() {
        return err(pos, ParseErrorKind::EmptyHost);
    }
    let mut rem = &hp[host_len..];
    pos += host_len;

    // Only ":", ";" or "?" may follow the host. This catches trailing
    // bytes after a bracketed literal.
    if let Some(c) = rem.chars().next() {
        if !matches!(c, ':' | ';' | '?') {
            return err(pos, ParseErrorKind::UnexpectedChar);
        }
    }

    let mut port = 0u16;
    if let Some(r) = rem.strip_prefix(':') {
        pos += 1;
        let end = r.find(|c| matches!(c, ';' | '?')).unwrap_or(r.len());
        let digits = &r[..end];
        // u16::from_str also accepts a leading "+"; the URI grammar
        // does not.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return err(pos, ParseErrorKind::InvalidPort);
        }
        port = match digits.parse() {
            Ok(port) => port,
            Err(_) => return err(pos, ParseErrorKind::InvalidPort),
        };
        rem = &r[end..];
    }

    // Params run up to "?"; headers run to the end. The leading
    // delimiters are not stored.
    let (params, headers) = match rem.strip_prefix(';') {
        Some(r) => match r.find('?') {
            Some(q) => (&r[..q], &r[q + 1..]),
            None => (r, ""),
        },
        None => ("", rem.strip_prefix('?').unwrap_or(rem)),
    };

    Ok(Uri {
        scheme: scheme.to_owned(),
        user,
        password,
        host: host.to_owned(),
        addr_family,
        port,
        params: params.to_owned(),
        headers: headers.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn userinfo_split() {
        let uri = parse("sip:alice:wonder@land").unwrap();
        assert_eq!(uri.user(), Some("alice"));
        assert_eq!(uri.password(), Some("wonder"));
        assert_eq!(uri.host(), "land");
    }

    #[test]
    fn empty_userinfo_is_absent() {
        let uri = parse("sip:@example.com").unwrap();
        assert_eq!(uri.user(), None);
        assert_eq!(uri.password(), None);

        let uri = parse("sip::secret@example.com").unwrap();
        assert_eq!(uri.user(), None);
        assert_eq!(uri.password(), Some("secret"));
    }
}

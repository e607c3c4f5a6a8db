use crate::error::NotFoundError;
use ref_cast::RefCast;

/// The raw parameter run of a URI, a `name=value` sequence
/// delimited by ";".
///
/// The run is kept unparsed: every lookup and iteration re-scans it,
/// so no allocation or index is built unless the caller collects the
/// pairs. Duplicate names are preserved in document order and a name
/// without "=" carries an empty value.
///
/// # Examples
///
/// ```
/// use sip_uri::Params;
///
/// let params = Params::new("transport=udp;lr;maddr=239.255.255.1");
/// assert_eq!(params.get("transport"), Ok("udp"));
/// assert_eq!(params.get("lr"), Ok(""));
/// assert!(params.get("ttl").is_err());
/// ```
#[derive(RefCast)]
#[repr(transparent)]
pub struct Params(str);

impl Params {
    /// Converts a string slice to a `Params`.
    ///
    /// A single leading ";" is tolerated, so a run cut straight from a
    /// URI string works unchanged.
    #[inline]
    pub fn new(s: &str) -> &Params {
        Params::ref_cast(s)
    }

    /// Yields the raw run as a string slice, exactly as stored.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the run holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns a lazy iterator over the `(name, value)` pairs
    /// in document order.
    ///
    /// The iterator re-scans the raw run from the start each time it is
    /// created, so it is restartable and never caches. Both name and
    /// value are yielded exactly as stored, still in escaped form.
    /// Empty segments (";;") and segments with an empty name are
    /// skipped.
    #[inline]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            s: &self.0,
            delim: b';',
        }
    }

    /// Returns the value of the first pair whose name matches exactly.
    ///
    /// Names are compared byte-for-byte in their stored form; no
    /// unescaping is applied by the lookup. A missing name is a
    /// distinct [`NotFoundError`] carrying the searched name, never an
    /// empty-string return.
    pub fn get(&self, name: &str) -> Result<&str, NotFoundError> {
        get(self.iter(), name)
    }

    /// Collects all pairs into a vector, preserving order and
    /// duplicates.
    pub fn to_vec(&self) -> Vec<(&str, &str)> {
        self.iter().collect()
    }
}

/// The raw header run of a URI, a `name=value` sequence introduced by
/// "?" and delimited by "&".
///
/// Shares the pair grammar of [`Params`] except for the delimiters;
/// see there for the lookup and iteration semantics.
///
/// # Examples
///
/// ```
/// use sip_uri::Headers;
///
/// let headers = Headers::new("subject=project%20x&priority=urgent");
/// assert_eq!(headers.get("subject"), Ok("project%20x"));
/// assert_eq!(
///     headers.to_vec(),
///     [("subject", "project%20x"), ("priority", "urgent")]
/// );
/// ```
#[derive(RefCast)]
#[repr(transparent)]
pub struct Headers(str);

impl Headers {
    /// Converts a string slice to a `Headers`.
    ///
    /// A single leading "?" or "&" is tolerated, so a run cut straight
    /// from a URI string works unchanged.
    #[inline]
    pub fn new(s: &str) -> &Headers {
        Headers::ref_cast(s)
    }

    /// Yields the raw run as a string slice, exactly as stored.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the run holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns a lazy iterator over the `(name, value)` pairs
    /// in document order.
    ///
    /// See [`Params::iter`] for the scan semantics.
    #[inline]
    pub fn iter(&self) -> Pairs<'_> {
        let s = self.0.strip_prefix('?').unwrap_or(&self.0);
        Pairs { s, delim: b'&' }
    }

    /// Returns the value of the first pair whose name matches exactly.
    ///
    /// See [`Params::get`] for the lookup semantics.
    pub fn get(&self, name: &str) -> Result<&str, NotFoundError> {
        get(self.iter(), name)
    }

    /// Collects all pairs into a vector, preserving order and
    /// duplicates.
    pub fn to_vec(&self) -> Vec<(&str, &str)> {
        self.iter().collect()
    }
}

fn get<'a>(pairs: Pairs<'a>, name: &str) -> Result<&'a str, NotFoundError> {
    let mut pairs = pairs;
    pairs
        .find(|&(n, _)| n == name)
        .map(|(_, v)| v)
        .ok_or_else(|| NotFoundError {
            name: name.to_owned(),
        })
}

/// A lazy iterator over the `(name, value)` pairs of a raw
/// parameter or header run.
///
/// This struct is created by [`Params::iter`] and [`Headers::iter`].
/// Dropping it mid-run has no effect beyond the pairs already yielded;
/// aborting an iteration is ordinary control flow:
///
/// ```
/// use sip_uri::Params;
///
/// let params = Params::new("a=1;b=2;c=3");
/// let res: Result<(), String> = params.iter().try_for_each(|(name, value)| {
///     if name == "b" {
///         Err(format!("unexpected {name}={value}"))
///     } else {
///         Ok(())
///     }
/// });
/// assert_eq!(res, Err("unexpected b=2".into()));
/// ```
#[derive(Clone, Debug)]
pub struct Pairs<'a> {
    s: &'a str,
    delim: u8,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        loop {
            if self.s.is_empty() {
                return None;
            }
            let delim = self.delim as char;
            let (seg, rest) = match self.s.find(delim) {
                Some(i) => (&self.s[..i], &self.s[i + 1..]),
                None => (self.s, ""),
            };
            self.s = rest;

            let (name, value) = match seg.split_once('=') {
                Some(pair) => pair,
                None => (seg, ""),
            };
            if !name.is_empty() {
                return Some((name, value));
            }
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    #[inline]
    fn into_iter(self) -> Pairs<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    #[inline]
    fn into_iter(self) -> Pairs<'a> {
        self.iter()
    }
}

impl PartialEq for Params {
    #[inline]
    fn eq(&self, other: &Params) -> bool {
        self.0 == other.0
    }
}

impl Eq for Params {}

impl PartialEq<str> for Params {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.0 == other
    }
}

impl PartialEq for Headers {
    #[inline]
    fn eq(&self, other: &Headers) -> bool {
        self.0 == other.0
    }
}

impl Eq for Headers {}

impl PartialEq<str> for Headers {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.0 == other
    }
}

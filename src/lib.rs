#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! A SIP URI component codec.
//!
//! This crate models the eight-field URI value used by SIP
//! (`scheme:[user[:password]@]host[:port][;params][?headers]`,
//! [Section 19.1, RFC 3261][1]) and nothing above it: parsing,
//! canonical re-encoding, the `;`/`&`-delimited `name=value`
//! mini-language of the params and headers runs, and the
//! per-component percent-escaping family. SIP transactions, DNS and
//! transports belong to whatever networking stack consumes the values.
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc3261/#section-19.1
//!
//! Three properties shape the API:
//!
//! - **Values are immutable.** [`Uri::parse`] and [`Builder::build`]
//!   are the only constructors; a constructed value is never mutated,
//!   only re-encoded or replaced.
//! - **Escaping is explicit.** Components are stored and written
//!   exactly as given; the [`encoding`] functions are separate,
//!   deliberate transforms. Equality is byte-exact per field, so two
//!   URIs differing only in escaping are *not* equal.
//! - **Params and headers stay raw.** The `name=value` runs are kept
//!   unparsed and re-scanned per lookup; see [`Params`] and
//!   [`Headers`].
//!
//! # Examples
//!
//! ```
//! use sip_uri::Uri;
//!
//! let uri = Uri::parse("sip:alice@example.com:5060;transport=udp?subject=project")?;
//! assert_eq!(uri.scheme(), "sip");
//! assert_eq!(uri.user(), Some("alice"));
//! assert_eq!(uri.host(), "example.com");
//! assert_eq!(uri.port(), 5060);
//! assert_eq!(uri.params().get("transport"), Ok("udp"));
//! assert_eq!(uri.headers().get("subject"), Ok("project"));
//!
//! // Display writes the canonical form.
//! assert_eq!(
//!     uri.to_string(),
//!     "sip:alice@example.com:5060;transport=udp?subject=project"
//! );
//! # Ok::<_, sip_uri::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: serializes a [`Uri`] as its canonical string and
//!   deserializes through [`Uri::parse`].

mod builder;
pub mod encoding;
mod error;
mod fmt;
mod params;
mod parser;
#[cfg(feature = "serde")]
mod serde;

pub use builder::Builder;
pub use error::{BuildError, BuildErrorKind, NotFoundError, ParseError, ParseErrorKind};
pub use params::{Headers, Pairs, Params};

/// How the host of a URI should be interpreted.
///
/// The tag is informational: it records what the decoder saw (or what
/// a builder was told) and selects IPv6 bracketing on encode, but it is
/// never validated against the host's contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddrFamily {
    /// A domain name, or anything else that is not an IP literal.
    #[default]
    Unspec,
    /// An IPv4 literal.
    Ipv4,
    /// An IPv6 literal, written in brackets.
    Ipv6,
}

/// A SIP URI, decomposed into its eight components.
///
/// A `Uri` is an immutable owned value. Each component is stored
/// exactly as it appeared in the input (or was given to the
/// [`Builder`]), still in escaped form; unescaping is an explicit,
/// separate step through the [`encoding`] functions.
///
/// Equality is field-wise and byte-exact over all eight components,
/// including the address family and the port. No case folding, escape
/// normalization or default-port logic is applied:
///
/// ```
/// use sip_uri::Uri;
///
/// let a = Uri::parse("sip:alice@example.com")?;
/// let b = Uri::parse("sip:%61lice@example.com")?;
/// assert_ne!(a, b);
/// # Ok::<_, sip_uri::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    pub(crate) scheme: String,
    pub(crate) user: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) host: String,
    pub(crate) addr_family: AddrFamily,
    pub(crate) port: u16,
    pub(crate) params: String,
    pub(crate) headers: String,
}

impl Uri {
    /// Parses a URI string.
    ///
    /// The accepted grammar is
    /// `scheme:[user[:password]@]host[:port][;params][?headers]`.
    /// The host is delimited, not validated: it may be a domain name,
    /// an IPv4 literal, or a bracketed IPv6 literal (the brackets are
    /// stripped and the address family tagged [`AddrFamily::Ipv6`]).
    /// The params and headers runs are stored raw, without their
    /// leading ";" / "?"; parsing them is deferred to [`Params`] and
    /// [`Headers`].
    ///
    /// # Errors
    ///
    /// Fails with a [`ParseError`] locating the offense when the
    /// scheme is missing, the host is empty, an IP literal is
    /// unterminated, or the port is not a decimal number within the
    /// 16-bit range. No partial value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sip_uri::{AddrFamily, ParseErrorKind, Uri};
    ///
    /// let uri = Uri::parse("sips:[2001:db8::7]:5061;transport=tls")?;
    /// assert_eq!(uri.host(), "2001:db8::7");
    /// assert_eq!(uri.addr_family(), AddrFamily::Ipv6);
    /// assert_eq!(uri.port(), 5061);
    ///
    /// let err = Uri::parse("sip:example.com:70000").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::InvalidPort);
    /// # Ok::<_, sip_uri::ParseError>(())
    /// ```
    #[inline]
    pub fn parse(s: &str) -> Result<Uri, ParseError> {
        parser::parse(s)
    }

    /// Creates a [`Builder`] for a URI.
    #[inline]
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the scheme. Non-empty.
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the user, exactly as stored (still escaped).
    #[inline]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password, exactly as stored (still escaped).
    #[inline]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the host, without IPv6 brackets. Non-empty.
    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the address family tag.
    #[inline]
    pub fn addr_family(&self) -> AddrFamily {
        self.addr_family
    }

    /// Returns the port, with `0` meaning "not specified".
    ///
    /// The zero convention is the caller's; the codec only guarantees
    /// that a zero port is never written out.
    #[inline]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the raw parameter run, empty when absent.
    #[inline]
    pub fn params(&self) -> &Params {
        Params::new(&self.params)
    }

    /// Returns the raw header run, empty when absent.
    #[inline]
    pub fn headers(&self) -> &Headers {
        Headers::new(&self.headers)
    }
}

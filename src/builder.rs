use crate::error::{BuildError, BuildErrorKind};
use crate::{AddrFamily, Uri};

/// A builder for [`Uri`] values.
///
/// This struct is created by [`Uri::builder`].
///
/// Components are taken exactly as given: no escaping is applied, and
/// the params/headers runs are stored without their leading ";" / "?".
/// Validation runs once in [`build`], before any encoding work, so a
/// failed build never yields a partial URI.
///
/// [`build`]: Self::build
///
/// # Examples
///
/// ```
/// use sip_uri::Uri;
///
/// let uri = Uri::builder()
///     .scheme("sip")
///     .user("alice")
///     .host("example.com")
///     .port(5060)
///     .params("transport=udp")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_string(), "sip:alice@example.com:5060;transport=udp");
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Builder {
    scheme: String,
    user: String,
    password: String,
    host: String,
    addr_family: AddrFamily,
    port: u32,
    params: String,
    headers: String,
}

impl Builder {
    /// Sets the scheme. Required and non-empty.
    pub fn scheme<S: Into<String>>(mut self, scheme: S) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets the user, in already-escaped form.
    ///
    /// An empty user counts as absent, as does an unset one.
    pub fn user<S: Into<String>>(mut self, user: S) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the password, in already-escaped form.
    ///
    /// An empty password counts as absent. A password is only written
    /// out when a user is present.
    pub fn password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the host. Required and non-empty; not validated beyond that.
    ///
    /// An IPv6 literal is given without brackets; set the address
    /// family to [`AddrFamily::Ipv6`] so the encoder brackets it.
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    /// Tags how the host should be interpreted.
    ///
    /// The tag is not checked against the host's contents.
    pub fn addr_family(mut self, addr_family: AddrFamily) -> Self {
        self.addr_family = addr_family;
        self
    }

    /// Sets the port.
    ///
    /// The value is taken loosely as a `u32` and checked against the
    /// 16-bit range in [`build`]. Zero means "not specified" and is
    /// never written out.
    ///
    /// [`build`]: Self::build
    pub fn port(mut self, port: u32) -> Self {
        self.port = port;
        self
    }

    /// Sets the raw parameter run, without the leading ";".
    pub fn params<S: Into<String>>(mut self, params: S) -> Self {
        self.params = params.into();
        self
    }

    /// Sets the raw header run, without the leading "?".
    pub fn headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.headers = headers.into();
        self
    }

    /// Builds the [`Uri`], validating the components.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] when the scheme or host is empty or the
    /// port does not fit in 16 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use sip_uri::{BuildErrorKind, Uri};
    ///
    /// let err = Uri::builder()
    ///     .scheme("sip")
    ///     .host("example.com")
    ///     .port(65536)
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), BuildErrorKind::PortOutOfRange(65536));
    /// ```
    pub fn build(self) -> Result<Uri, BuildError> {
        if self.scheme.is_empty() {
            return Err(BuildError(BuildErrorKind::EmptyScheme));
        }
        if self.host.is_empty() {
            return Err(BuildError(BuildErrorKind::EmptyHost));
        }
        if self.port > 0xffff {
            return Err(BuildError(BuildErrorKind::PortOutOfRange(self.port)));
        }

        fn nonempty(s: String) -> Option<String> {
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }

        Ok(Uri {
            scheme: self.scheme,
            user: nonempty(self.user),
            password: nonempty(self.password),
            host: self.host,
            addr_family: self.addr_family,
            port: self.port as u16,
            params: self.params,
            headers: self.headers,
        })
    }
}

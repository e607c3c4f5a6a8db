/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The scheme component is missing or empty.
    ///
    /// The error index is always zero.
    NoScheme,
    /// The host component is empty.
    ///
    /// The error index points to where the host would begin.
    EmptyHost,
    /// An IP literal is missing its closing bracket.
    ///
    /// The error index points to the left square bracket "[".
    UnclosedBracket,
    /// The port is empty, non-numeric, or greater than 65535.
    ///
    /// The error index points to the first byte after the port colon.
    InvalidPort,
    /// Unexpected character that is not allowed by the URI syntax.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
}

/// An error occurred when decoding a URI string or unescaping a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::error::Error for ParseError {}

/// Detailed cause of a [`BuildError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildErrorKind {
    /// The scheme component is required but empty.
    EmptyScheme,
    /// The host component is required but empty.
    EmptyHost,
    /// The port does not fit in 16 bits.
    PortOutOfRange(u32),
}

/// An error occurred when building a [`Uri`] from components.
///
/// Validation happens before any encoding work; a failed build
/// never produces a partial URI string.
///
/// [`Uri`]: crate::Uri
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildError(pub(crate) BuildErrorKind);

impl BuildError {
    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> BuildErrorKind {
        self.0
    }
}

impl std::error::Error for BuildError {}

/// A parameter or header lookup found no pair with the searched name.
///
/// This is a distinct failure signal, not an empty-string return:
/// a present pair with an empty value yields `Ok("")` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFoundError {
    pub(crate) name: String,
}

impl NotFoundError {
    /// Returns the name that was searched for.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::error::Error for NotFoundError {}

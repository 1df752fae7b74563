use crate::arena::{Arena, Span};
use crate::compat::{Cow, String, Vec};
use crate::error::Result;

/// Component spans for one parsed identifier.
///
/// Every span points into the result's own arena. `None` means the
/// component was absent from the input; spans may be empty (`host` in
/// particular is an empty span whenever scanning ran without finding an
/// authority).
#[derive(Debug, Default)]
pub(crate) struct IriComponents {
    pub(crate) scheme: Option<Span>,
    pub(crate) user: Option<Span>,
    pub(crate) auth: Option<Span>,
    pub(crate) password: Option<Span>,
    pub(crate) host: Option<Span>,
    pub(crate) port: u32,
    pub(crate) path: Option<Span>,
    pub(crate) query: Option<Span>,
    pub(crate) anchor: Option<Span>,
    /// Ordered `+`-delimited scheme tokens; non-empty iff `scheme` is set
    pub(crate) scheme_list: Vec<Span>,
    /// Reserved for an external key-value split pass; never populated here
    pub(crate) query_params: Vec<(Span, Span)>,
}

impl IriComponents {
    /// Copy the span table with fallible allocation for the lists.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        let mut scheme_list = Vec::new();
        scheme_list.try_reserve_exact(self.scheme_list.len())?;
        scheme_list.extend_from_slice(&self.scheme_list);

        let mut query_params = Vec::new();
        query_params.try_reserve_exact(self.query_params.len())?;
        query_params.extend_from_slice(&self.query_params);

        Ok(Self {
            scheme: self.scheme,
            user: self.user,
            auth: self.auth,
            password: self.password,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            anchor: self.anchor,
            scheme_list,
            query_params,
        })
    }
}

/// One component's bytes.
///
/// Percent-decoding can produce arbitrary bytes from valid UTF-8 input,
/// so components are byte slices first and strings on request. The
/// `Display` impl renders lossily; comparisons against `str` and `[u8]`
/// work directly in either direction of strictness.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Component<'a> {
    bytes: &'a [u8],
}

impl<'a> Component<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The component as UTF-8 text, if it is valid UTF-8.
    pub fn to_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.bytes).ok()
    }

    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Deferred lenient decode of a component the scanner left raw
    /// (`query`, `auth`). `plus_to_space` opts into the form-value
    /// convention; the scanner itself never applies it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Allocation`](crate::ParseError::Allocation)
    /// if the output buffer cannot be reserved.
    pub fn decode(&self, plus_to_space: bool) -> Result<Vec<u8>> {
        crate::decode::decode_lenient(self.bytes, plus_to_space)
    }
}

impl core::fmt::Display for Component<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.to_string_lossy(), f)
    }
}

impl core::fmt::Debug for Component<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl PartialEq<str> for Component<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Component<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Component<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for Component<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Component<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other
    }
}

/// Iterator over the ordered scheme tokens of a parsed identifier.
///
/// Exactly as many items as the identifier has scheme tokens; at least
/// one whenever a scheme is present, none for scheme-less inputs.
#[derive(Debug, Clone)]
pub struct Schemes<'a> {
    arena: &'a Arena,
    tokens: core::slice::Iter<'a, Span>,
}

impl<'a> Schemes<'a> {
    pub(crate) fn new(arena: &'a Arena, tokens: &'a [Span]) -> Self {
        Self {
            arena,
            tokens: tokens.iter(),
        }
    }
}

impl<'a> Iterator for Schemes<'a> {
    type Item = Component<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens
            .next()
            .map(|&span| Component::new(self.arena.get(span)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl ExactSizeIterator for Schemes<'_> {}

impl DoubleEndedIterator for Schemes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tokens
            .next_back()
            .map(|&span| Component::new(self.arena.get(span)))
    }
}

/// Iterator over split query parameters.
///
/// Reserved surface: the scanner never splits the query, so this is
/// always empty until an external pass populates it.
#[derive(Debug, Clone)]
pub struct QueryParams<'a> {
    arena: &'a Arena,
    params: core::slice::Iter<'a, (Span, Span)>,
}

impl<'a> QueryParams<'a> {
    pub(crate) fn new(arena: &'a Arena, params: &'a [(Span, Span)]) -> Self {
        Self {
            arena,
            params: params.iter(),
        }
    }
}

impl<'a> Iterator for QueryParams<'a> {
    type Item = (Component<'a>, Component<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.params.next().map(|&(key, value)| {
            (
                Component::new(self.arena.get(key)),
                Component::new(self.arena.get(value)),
            )
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.params.size_hint()
    }
}

impl ExactSizeIterator for QueryParams<'_> {}

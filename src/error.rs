/// Errors that can occur while building a parsed identifier.
///
/// Malformed input is never an error: ambiguous or ill-formed delimiter
/// arrangements fall through to a best-effort split instead. The only way
/// a parse can fail is the allocator refusing memory for the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Arena or structure allocation failed
    Allocation,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Allocation => "Allocation failed",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl From<crate::compat::TryReserveError> for ParseError {
    fn from(_: crate::compat::TryReserveError) -> Self {
        Self::Allocation
    }
}

/// Result type for parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

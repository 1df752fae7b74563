use crate::classify::LayoutKind;

/// A structured notice emitted while scanning.
///
/// These replace ad-hoc trace output: nothing is ever printed, the
/// events are handed to whatever [`DiagnosticSink`] the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// The grammar branch chosen for the whole input
    Layout(LayoutKind),
    /// A `scheme://user...@` prefix was recognized
    UserinfoAfterScheme,
    /// A compact `scheme:user...@` prefix was recognized (no `//`)
    CompactUserinfo,
    /// A second colon-delimited segment demoted the earlier fields
    /// (`user` takes `auth`'s value, `password` is re-read)
    UserinfoReassigned,
}

/// Receiver for scan-time notices.
///
/// The default sink discards everything; pass a collecting sink to
/// [`Iri::parse_with_diagnostics`](crate::Iri::parse_with_diagnostics)
/// to observe which branches a parse took.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

impl DiagnosticSink for crate::compat::Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

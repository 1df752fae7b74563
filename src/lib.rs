//! Lenient IRI/URI/URL component splitting.
//!
//! One pass, no rejection: any input is split along whatever delimiters
//! survive classification, and the pieces come back as views into a
//! single owned buffer. See [`Iri::parse`] for the entry point.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod arena;
mod classify;
mod components;
mod decode;
mod diagnostics;
mod error;
mod iri;
mod scanner;
mod scheme_list;

// Public API
pub use classify::LayoutKind;
pub use components::{Component, QueryParams, Schemes};
pub use decode::decode_lenient;
pub use diagnostics::{Diagnostic, DiagnosticSink, SilentSink};
pub use error::ParseError;
pub use iri::Iri;

pub type Result<T> = core::result::Result<T, ParseError>;

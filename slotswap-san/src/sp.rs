//! Payloads tagged with the location they were read from.
//!
//! Operands of `swap!` keep the `Span` of their source tokens through
//! translation and checks, so that both the diagnostics of the macro and
//! the errors rustc reports on the expansion point into the invocation.

use std::fmt;

use proc_macro2::TokenStream;
use quote::{quote_spanned, ToTokens};

pub use slotswap_err::Span;

/// A value and where it comes from.
#[derive(Debug, Clone, Copy)]
pub struct Sp<T> {
    /// The value.
    pub t: T,
    /// Its location in the macro input.
    pub span: Span,
}

impl<T> Sp<T> {
    /// Attach a location.
    pub fn new(t: T, span: Span) -> Self {
        Self { t, span }
    }

    /// Same location, payload behind a `Box` for recursive places.
    pub fn boxed(self) -> Sp<Box<T>> {
        Sp {
            t: Box::new(self.t),
            span: self.span,
        }
    }
}

/// Only the payload is printed.
impl<T: fmt::Display> fmt::Display for Sp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.t.fmt(f)
    }
}

/// Tokens created while printing the payload get its location.
impl<T: ToTokens> ToTokens for Sp<T> {
    fn to_tokens(&self, toks: &mut TokenStream) {
        let Self { t, span } = self;
        toks.extend(quote_spanned! {*span=> #t });
    }
}

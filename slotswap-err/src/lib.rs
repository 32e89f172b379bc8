//! Error message generation for the `swap!` macro.
//!
//! Errors are sequences of messages, each optionally attached to a
//! [`Span`] of the macro input. The first message is the headline and must
//! carry a span; the others are notes.
//!
//! Internal invariants of the macro itself are not reported through
//! [`Error`] but through [`abort!`] and [`consistency!`], which panic with
//! a request to file a bug.

#![warn(
    missing_docs,
    unused_crate_dependencies,
    unused_macro_rules,
    variant_size_differences,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::missing_docs_in_private_items,
    clippy::multiple_inherent_impl,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unreachable,
    clippy::unwrap_used,
    clippy::use_debug
)]

mod error;

pub use error::*;

pub use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::quote_spanned;

/// Name of the crate for bug reports.
#[doc(hidden)]
pub const CRATE: &str = env!("CARGO_PKG_NAME");

/// Generate an internal error message with a trace of where it happened.
///
/// Do not use this to report errors in the user's code, only for
/// situations that the macro should have made impossible.
#[macro_export]
macro_rules! abort {
    ($($err:tt)*) => {{
        std::panic!("
Internal error in {}:
  at {}:{}:{}
  {}
This is a bug in the macro, not in your code.",
            $crate::CRATE,
            file!(), line!(), column!(),
            format!($($err)*),
        );
    }};
}

/// Assert that a boolean holds, with a custom error message.
#[macro_export]
macro_rules! consistency {
    ($cond:expr, $($msg:tt)*) => {{
        if !$cond {
            $crate::abort!($($msg)*);
        }
    }};
}

/// Accumulator of errors.
///
/// Checks that are independent of each other all push into the same
/// `EAccum` so that a single macro invocation reports every problem at
/// once instead of only the first.
#[derive(Debug, Default)]
pub struct EAccum {
    /// Errors in the order they were found.
    es: Vec<Error>,
}

impl EAccum {
    /// Record a new error.
    pub fn error<E: IntoError>(&mut self, e: E) {
        self.es.push(e.into_err());
    }

    /// Record the error of a `Result`, keeping its value if any.
    pub fn handle<T>(&mut self, res: Result<T>) -> Option<T> {
        match res {
            Ok(t) => Some(t),
            Err(e) => {
                self.es.push(e);
                None
            }
        }
    }

    /// Whether at least one error was recorded.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.es.is_empty()
    }

    /// Extract the recorded errors.
    #[must_use]
    pub fn fetch(self) -> Vec<Error> {
        self.es
    }
}

/// Turn one error into `compile_error!` invocations.
///
/// The headline is emitted at its span, followed by the notes that don't
/// have a span of their own. Notes with a span are emitted as separate
/// errors at their location.
#[must_use]
pub fn emit(elements: Error) -> TokenStream {
    let mut elements = elements.into_iter();
    let Some((headline, span)) = elements.next() else {
        abort!("This error message is empty")
    };
    let Some(span) = span else {
        abort!("The very first error should always have an associated span")
    };
    let mut msg = headline;
    let mut located = Vec::new();
    for (note, span) in elements {
        match span {
            Some(span) => {
                let note = format!("note: {note}");
                located.push(quote_spanned! {span=>
                    ::core::compile_error!(#note);
                });
            }
            None => {
                msg.push_str("\nnote: ");
                msg.push_str(&note);
            }
        }
    }
    quote_spanned! {span=>
        ::core::compile_error!(#msg);
        #( #located )*
    }
}

//! Interpret the attributes of a `swap!`.
//!
//! Because the syntax of attributes looks like
//! ```skip
//! #[trace]
//! #[trace[stdout]]
//! #[by_pointer]
//! a, b
//! ```
//! each attribute sets exactly one option, and setting an option twice
//! (possibly through different spellings) is an error.

use syn::spanned::Spanned;
use syn::{Attribute, Meta};

use slotswap_err::{self as err, IntoError, Result};
use slotswap_san::ast::{self, options::Mode, options::TraceFile};
use slotswap_san::sp::{Sp, Span};

/// The main helper to set options.
///
/// The interface of `SetOpt` is as follows:
/// - create one with `create`, pass it a description for error messages,
/// - update it with `set` when the corresponding attribute is found,
/// - `take` it once all attributes have been read.
#[must_use]
#[derive(Debug, Clone)]
struct SetOpt<T> {
    /// Value and location of the attribute that set it.
    value: Option<Sp<T>>,
    /// How to name this option in error messages.
    message: &'static str,
}

impl<T> SetOpt<T> {
    /// Unset option.
    fn create(message: &'static str) -> Self {
        Self {
            value: None,
            message,
        }
    }

    /// Assign a value, which must not have already been done.
    fn set(&mut self, t: T, span: Span) -> Result<()> {
        if let Some(prior) = &self.value {
            return Err(err::DuplicateOption {
                option: self.message,
                site: span,
                prior: prior.span,
            }
            .into_err());
        }
        self.value = Some(Sp::new(t, span));
        Ok(())
    }

    /// Get the value that was constructed, if any.
    fn take(self) -> Option<Sp<T>> {
        self.value
    }
}

/// How `#[by_pointer]` and `#[by_reference]` are named in error messages.
fn mode_attr(mode: Mode) -> &'static str {
    match mode {
        Mode::Pointer => "#[by_pointer]",
        Mode::Reference => "#[by_reference]",
    }
}

/// Options being applied to the current `swap!`.
#[derive(Debug, Clone)]
pub struct Decl {
    /// `#[trace]`: print debug information.
    trace: SetOpt<TraceFile>,
    /// `#[by_pointer]` / `#[by_reference]`: parameter-passing mechanism.
    mode: SetOpt<Mode>,
}

impl Default for Decl {
    fn default() -> Self {
        Self {
            trace: SetOpt::create("#[trace]"),
            mode: SetOpt::create("#[by_pointer]/#[by_reference]"),
        }
    }
}

impl Decl {
    /// Select the parameter-passing mechanism.
    /// The two mechanisms exclude each other.
    fn set_mode(&mut self, mode: Mode, span: Span) -> Result<()> {
        if let Some(prior) = &self.mode.value {
            if prior.t != mode {
                return Err(err::ConflictingOptions {
                    this: mode_attr(mode),
                    other: mode_attr(prior.t),
                    site: span,
                    prior: prior.span,
                }
                .into_err());
            }
        }
        self.mode.set(mode, span)
    }

    /// Update the current options with a new attribute.
    ///
    /// Errors point at the name of the attribute.
    pub fn with(&mut self, attr: &Attribute) -> Result<()> {
        let span = attr.path().span();
        match &attr.meta {
            Meta::Path(p) if p.is_ident("trace") => self.trace.set(TraceFile::StdErr, span),
            Meta::Path(p) if p.is_ident("by_pointer") => self.set_mode(Mode::Pointer, span),
            Meta::Path(p) if p.is_ident("by_reference") => self.set_mode(Mode::Reference, span),
            Meta::List(l) if l.path.is_ident("trace") => match l.parse_args::<syn::Ident>() {
                Ok(file) if file == "stdout" => self.trace.set(TraceFile::StdOut, span),
                Ok(file) if file == "stderr" => self.trace.set(TraceFile::StdErr, span),
                _ => Err(unknown(attr, span)),
            },
            _ => Err(unknown(attr, span)),
        }
    }

    /// Project to the record of options consumed by code generation.
    pub fn for_swap(self) -> ast::options::Swap {
        let Self { trace, mode } = self;
        ast::options::Swap {
            trace: trace.take(),
            mode: mode.take().map(|m| m.t).unwrap_or_default(),
        }
    }
}

/// Error for an attribute that is not one of the above.
fn unknown(attr: &Attribute, span: Span) -> err::Error {
    err::UnknownAttribute {
        attr: ast::printed(attr),
        site: span,
    }
    .into_err()
}

//! Internal representation of a `swap!` invocation.
//!
//! You should construct elements defined in this file by going through
//! the `translate` feature of the parent crate `slotswap-syn`,
//! and you can use them after performing the proper verifications by
//! converting them into code using the `ToTokens` impls from `codegen.rs`.

use std::fmt;

use crate::sp::Sp;

/// Options that a single invocation can be configured with.
pub mod options {
    use crate::sp::Sp;

    /// Where to print the debug information.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TraceFile {
        /// `#[trace[stdout]]`
        StdOut,
        /// `#[trace]` or `#[trace[stderr]]`
        StdErr,
    }

    /// Parameter-passing mechanism used to reach the caller's slots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Mode {
        /// `#[by_reference]`: `&mut` to both places.
        #[default]
        Reference,
        /// `#[by_pointer]`: `*mut` to both places.
        Pointer,
    }

    /// All options of a `swap!`.
    ///
    /// Code generation destructures this record, so adding a field here
    /// does not compile until it is handled there too.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Swap {
        /// `#[trace]`: print the slots before and after the exchange.
        pub trace: Option<Sp<TraceFile>>,
        /// `#[by_pointer]` / `#[by_reference]`.
        pub mode: Mode,
    }
}

/// A memory location that can be assigned to.
#[derive(Debug, Clone)]
pub enum Place {
    /// A (possibly qualified) variable, e.g. `x` or `self::X`.
    Var(syn::Path),
    /// A named or positional field of a place, e.g. `p.x` or `t.0`.
    Field {
        /// Place that owns the field.
        base: Sp<Box<Place>>,
        /// Name or index of the field.
        member: syn::Member,
    },
    /// An indexed element of a place, e.g. `v[i]`.
    Index {
        /// Indexed place.
        base: Sp<Box<Place>>,
        /// Arbitrary index expression.
        index: syn::Expr,
    },
    /// The target of a reference or pointer, e.g. `*r`.
    /// Any expression can be dereferenced.
    Deref(Sp<Box<syn::Expr>>),
}

/// Printed form of an expression: `quote`'s spacing with the
/// whitespace around punctuation removed.
pub fn printed(toks: &impl quote::ToTokens) -> String {
    let spaced = toks.to_token_stream().to_string();
    let mut out = String::with_capacity(spaced.len());
    let mut chars = spaced.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let prev_is_word = out
                .chars()
                .last()
                .is_some_and(|p| p.is_alphanumeric() || p == '_');
            let next_is_word = chars
                .peek()
                .is_some_and(|n| n.is_alphanumeric() || *n == '_');
            if prev_is_word && next_is_word {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(path) => write!(f, "{}", printed(path)),
            Self::Field { base, member } => {
                if matches!(*base.t, Self::Deref(_)) {
                    write!(f, "({base})")?;
                } else {
                    write!(f, "{base}")?;
                }
                match member {
                    syn::Member::Named(id) => write!(f, ".{id}"),
                    syn::Member::Unnamed(idx) => write!(f, ".{}", idx.index),
                }
            }
            Self::Index { base, index } => write!(f, "{base}[{}]", printed(index)),
            Self::Deref(e) => write!(f, "*{}", printed(&*e.t)),
        }
    }
}

/// Two places are the same if they are written the same way.
///
/// This is a syntactic criterion: `v[i]` and `v[j]` are distinct even when
/// `i == j` at runtime.
impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// A complete `swap!` invocation.
#[derive(Debug, Clone)]
pub struct Swap {
    /// Configuration from the attributes.
    pub options: options::Swap,
    /// First slot.
    pub left: Sp<Place>,
    /// Second slot.
    pub right: Sp<Place>,
}

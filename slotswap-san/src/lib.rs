//! Perform verification of a `swap!` invocation all the way down to code generation.
//!
//! The entry point for this entire crate is in constructing an AST
//! in `ast::Swap`, and then you should do the following in exactly that order:
//!
//! 0. From a parsed result, construct an `ast::Swap`
//!     (done by `slotswap_syn::translate`).
//!
//! 1. Static checks
//!     by `check::Check`
//!
//!     (rejects swapping a place with itself, which the borrow checker
//!     would otherwise report in a much less readable way)
//!
//! 2. Codegen
//!     by `quote::ToTokens` in `codegen`
//!
//! Skipping step 1 produces code that either fails to borrow
//! (`#[by_reference]`) or silently does nothing (`#[by_pointer]`).

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
    clippy::panic,
    clippy::pedantic,
    clippy::str_to_string,
    clippy::unreachable,
    clippy::unwrap_used,
    clippy::use_debug
)]

pub mod ast;
pub mod check;
pub mod codegen;
pub mod sp;

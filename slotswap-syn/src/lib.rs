//! Syntax of the `swap!` macro.
//!
//! The surface syntax is
//! ```text
//! <attribute>* <expr> , <expr> [,]
//! ```
//! Parsing only recognizes the shape of the invocation: the attributes are
//! interpreted and the expressions restricted to places during
//! [`translate`](SwapInput::translate).

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

mod ast;
mod translate;

pub use ast::SwapInput;

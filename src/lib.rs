//! Exchange the contents of two slots owned by the caller.
//!
//! This crate gathers the slotswap suite:
//! - [`swap!`] rewrites `swap!(a, b)` into the exchange of two places
//!   of the caller, through references (default) or raw pointers,
//! - [`sem`] is the runtime that the macro expands to, usable directly,
//! - [`programs`] are the two console programs shipped as executables
//!   `call_by_pointer` and `pass_by_reference`.
//!
//! ```
//! use slotswap::swap;
//!
//! let (mut a, mut b) = (45, 35);
//! swap!(a, b);
//! assert_eq!((a, b), (35, 45));
//! ```

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

pub mod programs;

pub use slotswap_macros::swap;
pub use slotswap_sem as sem;

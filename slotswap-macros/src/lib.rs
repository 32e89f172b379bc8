//! Declarative macros of the slotswap suite.
//!
//! This crate defines the `proc_macro`s provided to exchange two slots
//! of the caller. For now only the `swap` macro is available.

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

mod pipeline;

// Dependencies for integration tests: silence the "unused dependencies" warning.
#[cfg(test)]
mod integration_deps {
    use rand as _;
    use slotswap_sem as _;
}

/// Exchange the contents of two places of the caller.
///
/// Usage:
/// ```
/// let (mut a, mut b) = (45, 35);
/// slotswap_macros::swap!(a, b);
/// assert_eq!((a, b), (35, 45));
///
/// let mut p = (500, 200);
/// slotswap_macros::swap! {
///     #[by_pointer] // Go through `*mut` instead of `&mut`.
///     #[trace]      // Print the slots before and after to stderr.
///     p.0, p.1
/// }
/// assert_eq!(p, (200, 500));
/// ```
///
/// Both operands must be place expressions (variables, fields, indexed
/// elements, dereferences) and must be distinct. Constants and function
/// items are not places:
/// ```compile_fail
/// const A: i32 = 1;
/// const B: i32 = 2;
/// slotswap_macros::swap!(A, B);
/// ```
///
/// `#[by_pointer]` takes the address of both operands in the caller's
/// context, so dereferencing a raw pointer still needs an `unsafe` of the
/// caller:
/// ```compile_fail,E0133
/// fn no_unsafe(p: *mut i32, x: &mut i32) {
///     slotswap_macros::swap!(#[by_pointer] *p, *x);
/// }
/// ```
/// ```
/// unsafe fn with_unsafe(p: *mut i32, x: &mut i32) {
///     slotswap_macros::swap!(#[by_pointer] *p, *x);
/// }
/// let (mut a, mut b) = (1, 2);
/// unsafe { with_unsafe(&mut a, &mut b) };
/// assert_eq!((a, b), (2, 1));
/// ```
/// The operands of `#[by_pointer]` should not go through an overloaded
/// `IndexMut` such as `Vec` indexing: computing the second pointer borrows
/// the whole container again, which may invalidate the first one.
/// Use `#[by_reference]` on distinct containers, or `<[T]>::swap`.
///
/// The expansion calls into `slotswap_sem`, which must be a dependency
/// of the caller.
#[proc_macro]
pub fn swap(i: proc_macro::TokenStream) -> proc_macro::TokenStream {
    pipeline::expand(i.into()).into()
}

/// Generate a run of trybuild test cases.
/// Usage: `compiling!(test_name with expected_outcome in path/to/test/folder)`.
#[cfg(test)]
macro_rules! compiling {
    ($fun:ident with $testing:ident in $($dir:ident / )*) => {
        #[test]
        fn $fun() {
            let t = trybuild::TestCases::new();
            t.$testing(concat!("tests/", $( concat!(stringify!($dir), "/") , )* "**/*.rs"));
        }
    };
}

// Compile-Fail tests. These should fail to compile with the messages
// recorded next to them.
#[cfg(test)]
compiling!(fail_ui_place with compile_fail in compile_fail/ui/place/);
#[cfg(test)]
compiling!(fail_ui_check with compile_fail in compile_fail/ui/check/);
#[cfg(test)]
compiling!(fail_ui_options with compile_fail in compile_fail/ui/options/);
// Pass tests. These should compile and run.
#[cfg(test)]
compiling!(pass_places with pass in pass/places/);
#[cfg(test)]
compiling!(pass_options with pass in pass/options/);
#[cfg(test)]
compiling!(pass_programs with pass in pass/programs/);

//! Runtime semantics of the slotswap suite.
//!
//! A slot is a mutable storage location owned by the caller.
//! Swapping two slots exchanges their contents through a third,
//! temporary, location:
//! 1. the first value is staged in the temporary,
//! 2. the second value is written into the first slot,
//! 3. the staged value is written into the second slot.
//!
//! The operation is provided in the two parameter-passing styles
//! that can observe the caller's storage: by reference ([`swap_ref`])
//! and by pointer ([`swap_ptr`]). [`exchange`] performs the same
//! three steps on values that cannot be copied into the temporary.
//!
//! Code generated by `slotswap_macros::swap!` calls into this crate.

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

pub mod slot;

pub use slot::Slot;

/// Exchange the contents of two slots passed by reference.
///
/// Both slots stay owned by the caller: after the call `*x` holds
/// what `*y` held and vice versa.
/// The two references cannot alias, the borrow checker rejects
/// `swap_ref(&mut a, &mut a)`.
///
/// ```
/// let (mut a, mut b) = (45, 35);
/// slotswap_sem::swap_ref(&mut a, &mut b);
/// assert_eq!((a, b), (35, 45));
/// ```
#[inline]
pub fn swap_ref<T: Copy>(x: &mut T, y: &mut T) {
    let z = *x;
    *x = *y;
    *y = z;
}

/// Exchange the contents of two slots passed by pointer.
///
/// Unlike [`swap_ref`] the two pointers may designate the same slot,
/// in which case its contents are left unchanged.
///
/// ```
/// let (mut x, mut y) = (500, 200);
/// unsafe { slotswap_sem::swap_ptr(&mut x, &mut y) };
/// assert_eq!((x, y), (200, 500));
/// ```
///
/// # Safety
///
/// Both `x` and `y` must be valid for reads and writes and properly
/// aligned, and no other reference to either slot may be used for the
/// duration of the call.
#[inline]
pub unsafe fn swap_ptr<T: Copy>(x: *mut T, y: *mut T) {
    // SAFETY: guaranteed by the caller. Reads and writes go through the
    // raw pointers only, so `x == y` does not create overlapping `&mut`.
    unsafe {
        let swap = x.read();
        x.write(y.read());
        y.write(swap);
    }
}

/// Exchange the contents of two slots whose values are not `Copy`.
///
/// The value of `x` is moved out and staged while `y`'s value takes its
/// place, then the staged value is written into `y`.
/// The staging closure only moves values and cannot panic, so
/// `replace_with_or_abort` never takes its abort path here.
///
/// ```
/// let mut a = String::from("left");
/// let mut b = String::from("right");
/// slotswap_sem::exchange(&mut a, &mut b);
/// assert_eq!((a.as_str(), b.as_str()), ("right", "left"));
/// ```
pub fn exchange<T>(x: &mut T, y: &mut T) {
    replace_with::replace_with_or_abort(x, |staged| std::mem::replace(y, staged));
}

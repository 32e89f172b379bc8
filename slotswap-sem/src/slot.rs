//! Named slots.
//!
//! A `Slot<T>` is a value together with the name under which the program
//! that owns it displays it, so that `a=45` can be printed directly from
//! the slot. Swapping two slots exchanges their values but never their
//! names.

use std::fmt;

/// A named storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<T> {
    /// Name under which the slot is displayed.
    pub name: &'static str,
    /// Current contents.
    pub value: T,
}

impl<T> Slot<T> {
    /// A slot called `name` initially holding `value`.
    #[must_use]
    pub const fn new(name: &'static str, value: T) -> Self {
        Self { name, value }
    }

    /// Exchange the contents of `self` and `other`.
    ///
    /// ```
    /// # use slotswap_sem::Slot;
    /// let mut a = Slot::new("a", 45);
    /// let mut b = Slot::new("b", 35);
    /// a.swap_with(&mut b);
    /// assert_eq!(a.to_string(), "a=35");
    /// assert_eq!(b.to_string(), "b=45");
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        crate::exchange(&mut self.value, &mut other.value);
    }

    /// Remove the name.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Printed as `name=value`.
impl<T: fmt::Display> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

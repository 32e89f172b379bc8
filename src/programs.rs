//! The two console programs.
//!
//! Both write their transcript to any `io::Write` so that the executables
//! print to stdout and the tests can capture the exact bytes.

use std::io::{self, Write};

use slotswap_macros::swap;
use slotswap_sem::{self as sem, Slot};

/// Exchange two integers through pointers to the caller's variables.
///
/// Prints
/// ```text
/// Value of x is: 200
/// Value of y is: 500
/// ```
///
/// # Errors
/// If `out` cannot be written to.
pub fn call_by_pointer<W: Write>(out: &mut W) -> io::Result<()> {
    let mut x: i32 = 500;
    let mut y: i32 = 200;
    // SAFETY: `x` and `y` are live locals, borrowed for the call only.
    unsafe { sem::swap_ptr(&mut x, &mut y) };
    writeln!(out, "Value of x is: {x}")?;
    writeln!(out, "Value of y is: {y}")?;
    Ok(())
}

/// Exchange two integers through references to the caller's variables.
///
/// Prints
/// ```text
/// Before Swap
/// a=45 b=35
/// After Swap
/// a=35 b=45
/// ```
///
/// # Errors
/// If `out` cannot be written to.
pub fn pass_by_reference<W: Write>(out: &mut W) -> io::Result<()> {
    let mut a = Slot::<i32>::new("a", 45);
    let mut b = Slot::<i32>::new("b", 35);
    writeln!(out, "Before Swap")?;
    writeln!(out, "{a} {b}")?;
    swap!(a.value, b.value);
    writeln!(out, "After Swap")?;
    writeln!(out, "{a} {b}")?;
    Ok(())
}

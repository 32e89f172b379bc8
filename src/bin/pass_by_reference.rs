//! Swap two integers by passing references to them.

use std::io;

fn main() -> io::Result<()> {
    slotswap::programs::pass_by_reference(&mut io::stdout().lock())
}

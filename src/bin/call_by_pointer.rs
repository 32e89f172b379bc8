//! Swap two integers by passing pointers to them.

use std::io;

fn main() -> io::Result<()> {
    slotswap::programs::call_by_pointer(&mut io::stdout().lock())
}

//! Both operands are reported, not only the first.
use slotswap_macros::swap;

fn main() {
    swap!(1, 2);
}

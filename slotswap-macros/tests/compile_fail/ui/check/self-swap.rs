//! A slot cannot be swapped with itself.
use slotswap_macros::swap;

fn main() {
    let a = 1;
    swap!(a, a);
    println!("{a}");
}

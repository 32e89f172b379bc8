//! A swap goes either through pointers or through references.
use slotswap_macros::swap;

fn main() {
    let (a, b) = (1, 2);
    swap!(#[by_pointer] #[by_reference] a, b);
    println!("{a} {b}");
}

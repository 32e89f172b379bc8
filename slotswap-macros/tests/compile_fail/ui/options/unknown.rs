//! Attributes are limited to `trace`, `by_pointer` and `by_reference`.
use slotswap_macros::swap;

fn main() {
    let (a, b) = (1, 2);
    swap!(#[frobnicate] a, b);
    println!("{a} {b}");
}

//! Tracing is enabled at most once.
use slotswap_macros::swap;

fn main() {
    let (a, b) = (1, 2);
    swap!(#[trace] #[trace[stdout]] a, b);
    println!("{a} {b}");
}

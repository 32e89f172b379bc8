//! `#[trace]` prints to stderr by default, can be redirected to stdout,
//! and can be combined with either parameter-passing mechanism.
use slotswap_macros::swap;

fn main() {
    let mut a = 45;
    let mut b = 35;
    swap!(#[trace] a, b);
    swap!(#[trace[stderr]] a, b);
    swap!(#[trace[stdout]] #[by_pointer] a, b);
    swap!(#[by_reference] #[trace(stdout)] a, b);
    assert_eq!((a, b), (45, 35));

    let mut p = (1.5, -0.5);
    swap!(#[trace] p.0, p.1);
    assert_eq!(p, (-0.5, 1.5));
}

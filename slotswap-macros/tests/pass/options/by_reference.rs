//! `#[by_reference]` is the default and may be spelled out.
use slotswap_macros::swap;

struct Pair {
    a: i32,
    b: i32,
}

fn main() {
    let mut a = 45;
    let mut b = 35;
    swap!(#[by_reference] a, b);
    assert_eq!((a, b), (35, 45));

    let mut p = Pair { a: 1, b: 2 };
    swap!(#[by_reference] p.a, p.b);
    assert_eq!((p.a, p.b), (2, 1));
}

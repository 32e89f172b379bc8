//! Arbitrary values, including extremal ones, are exchanged exactly.
use slotswap_macros::swap;

fn main() {
    for _ in 0..100 {
        let (a, b) = (rand::random::<i32>(), rand::random::<i32>());
        let (mut x, mut y) = (a, b);
        swap!(x, y);
        assert_eq!((x, y), (b, a));
        swap!(#[by_pointer] x, y);
        assert_eq!((x, y), (a, b));
    }
}

//! `#[by_pointer]` goes through `*mut` but has the same effect.
use slotswap_macros::swap;

fn main() {
    let mut x = 500;
    let mut y = 200;
    swap! {
        #[by_pointer]
        x, y
    }
    assert_eq!((x, y), (200, 500));

    let mut arr = [9, 8];
    swap!(#[by_pointer] arr[0], arr[1]);
    assert_eq!(arr, [8, 9]);

    let mut p = (1, 2);
    let r = &mut p;
    swap!(#[by_pointer] r.0, r.1);
    assert_eq!(p, (2, 1));

    swap!(#[by_pointer] x, y);
    assert_eq!((x, y), (500, 200));
}

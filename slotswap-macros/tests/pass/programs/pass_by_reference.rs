//! Exchange through references in a helper function, like a C++ `swap(int&, int&)`.
use slotswap_macros::swap;

fn swap_int(x: &mut i32, y: &mut i32) {
    swap!(*x, *y);
}

fn main() {
    let mut a = 45;
    let mut b = 35;
    swap_int(&mut a, &mut b);
    assert_eq!((a, b), (35, 45));
    swap_int(&mut a, &mut b);
    assert_eq!((a, b), (45, 35));
}

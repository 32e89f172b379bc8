//! Local variables, the most common use.
use slotswap_macros::swap;

fn main() {
    let mut x = 500;
    let mut y = 200;
    swap!(x, y);
    assert_eq!((x, y), (200, 500));

    let (mut a, mut b) = (i32::MIN, i32::MAX);
    swap!(a, b,);
    assert_eq!((a, b), (i32::MAX, i32::MIN));
    swap!(a, b);
    assert_eq!((a, b), (i32::MIN, i32::MAX));

    let (mut z0, mut z1) = (0, 0);
    swap!(z0, z1);
    assert_eq!((z0, z1), (0, 0));
}

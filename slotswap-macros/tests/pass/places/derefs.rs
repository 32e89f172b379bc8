//! Swapping through references: the slots are owned by the caller of `f`.
use slotswap_macros::swap;

fn f(x: &mut i32, y: &mut i32) {
    swap!(*x, *y);
}

struct Wrapper<'a> {
    inner: &'a mut (i32, i32),
}

fn main() {
    let (mut a, mut b) = (45, 35);
    f(&mut a, &mut b);
    assert_eq!((a, b), (35, 45));

    let mut pair = (7, 8);
    let mut w = Wrapper { inner: &mut pair };
    swap!((*w.inner).0, w.inner.1);
    assert_eq!(pair, (8, 7));

    let mut boxed = Box::new(10);
    let mut plain = 20;
    swap!(*boxed, plain);
    assert_eq!((*boxed, plain), (20, 10));
}

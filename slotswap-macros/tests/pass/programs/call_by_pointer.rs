//! Exchange through pointers in a helper function, like a C `swap(int*, int*)`.
use slotswap_macros::swap;

/// # Safety
/// Both pointers must be valid for reads and writes.
unsafe fn swap_int(x: *mut i32, y: *mut i32) {
    swap!(#[by_pointer] *x, *y);
}

fn main() {
    let mut x = 500;
    let mut y = 200;
    unsafe { swap_int(&mut x, &mut y) };
    assert_eq!(x, 200);
    assert_eq!(y, 500);

    let p: *mut i32 = &mut x;
    unsafe { swap_int(p, p) };
    assert_eq!(x, 200);
}

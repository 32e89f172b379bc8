//! Elements of arrays, with constant and computed indices.
//!
//! Two elements of the same array cannot be borrowed mutably at the same
//! time, so these go through pointers.
use slotswap_macros::swap;

fn main() {
    let mut arr = [1, 2, 3, 4];
    swap!(#[by_pointer] arr[0], arr[3]);
    assert_eq!(arr, [4, 2, 3, 1]);

    let i = 1;
    swap!(#[by_pointer] arr[i], arr[i + 1]);
    assert_eq!(arr, [4, 3, 2, 1]);

    let mut grid = [[0, 1], [2, 3]];
    swap!(#[by_pointer] grid[0][1], grid[1][0]);
    assert_eq!(grid, [[0, 2], [1, 3]]);

    // Elements of distinct arrays are disjoint borrows.
    let mut left = [10, 20];
    let mut right = vec![30, 40];
    swap!(left[1], right[0]);
    assert_eq!((left, right), ([10, 30], vec![20, 40]));
}

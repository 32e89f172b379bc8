//! Only places can be swapped, not values.
use slotswap_macros::swap;

fn main() {
    let a = 1;
    swap!(a, 2);
    println!("{a}");
}

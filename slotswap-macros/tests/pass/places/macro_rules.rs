//! Operands forwarded through `macro_rules!` arrive wrapped in invisible groups.
use slotswap_macros::swap;

macro_rules! twice {
    ($a:expr, $b:expr) => {{
        swap!($a, $b);
        swap!($a, $b);
    }};
}

macro_rules! once {
    ($a:expr, $b:expr) => {
        swap!($a, $b)
    };
}

fn main() {
    let mut a = 1;
    let mut b = 2;
    twice!(a, b);
    assert_eq!((a, b), (1, 2));
    once!(a, b);
    assert_eq!((a, b), (2, 1));
}

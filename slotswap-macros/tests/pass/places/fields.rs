//! Named and positional fields, including fields of fields.
use slotswap_macros::swap;

struct Point {
    x: i64,
    y: i64,
}

struct Segment {
    start: Point,
    end: Point,
}

fn main() {
    let mut p = Point { x: 45, y: 35 };
    swap!(p.x, p.y);
    assert_eq!((p.x, p.y), (35, 45));

    let mut s = Segment {
        start: Point { x: 1, y: 2 },
        end: Point { x: 3, y: 4 },
    };
    swap!(s.start.x, s.end.y);
    assert_eq!((s.start.x, s.start.y, s.end.x, s.end.y), (4, 2, 3, 1));

    let mut t = (1u8, 2u8);
    swap!(t.0, t.1);
    assert_eq!(t, (2, 1));
}

//! Vector helpers and segment/polygon primitives.
//!
//! All predicates use exact-zero sign semantics: two vectors are parallel iff
//! their cross product is `== 0.0`, with no tolerance. Callers that need
//! fuzzy matching must pre-round their inputs.

use std::cmp::Ordering;

use super::Vec2;

/// Cross product of `a` and `b` about the origin.
///
/// Positive when `b` lies counter-clockwise of `a`, negative when clockwise,
/// exactly `0.0` when parallel.
#[inline]
pub fn ccw(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of `b` relative to `a`, as seen from `p`.
#[inline]
pub fn orient(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    ccw(a - p, b - p)
}

/// Counter-clockwise angle from the positive x-axis, in `[0, 2π)`.
#[inline]
pub fn polar(v: Vec2) -> f64 {
    (v.y.atan2(v.x) + std::f64::consts::TAU) % std::f64::consts::TAU
}

/// Orthogonal projection of `v` onto `onto`.
///
/// Pre: `onto` is not the zero vector (the division inside `normalize` is
/// otherwise undefined).
#[inline]
pub fn project(v: Vec2, onto: Vec2) -> Vec2 {
    let r = onto.normalize();
    r * r.dot(&v)
}

/// Lexicographic total order: by `x`, then by `y`.
#[inline]
pub fn lex_cmp(a: &Vec2, b: &Vec2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// `a < b` under [`lex_cmp`].
#[inline]
pub fn lex_less(a: &Vec2, b: &Vec2) -> bool {
    lex_cmp(a, b) == Ordering::Less
}

/// Intersection of the infinite lines through `(a,b)` and `(c,d)`.
///
/// `None` when the lines are parallel (determinant exactly zero); overlapping
/// lines are indistinguishable from disjoint parallels here — segment-level
/// disambiguation lives in [`parallel_segments`].
pub fn line_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    let det = ccw(b - a, d - c);
    if det == 0.0 {
        return None;
    }
    Some(a + (b - a) * (ccw(c - a, d - c) / det))
}

/// One common point of two collinear-and-parallel segments, if they overlap.
///
/// Endpoints are normalized to ascending lexicographic order first; disjoint
/// ranges yield `None`. The returned point is an arbitrary member of the
/// overlap (whichever upper endpoint the range test reaches first).
pub fn parallel_segments(
    mut a: Vec2,
    mut b: Vec2,
    mut c: Vec2,
    mut d: Vec2,
) -> Option<Vec2> {
    if lex_less(&b, &a) {
        std::mem::swap(&mut a, &mut b);
    }
    if lex_less(&d, &c) {
        std::mem::swap(&mut c, &mut d);
    }
    if lex_less(&b, &c) || lex_less(&d, &a) {
        return None;
    }
    Some(if lex_less(&a, &c) { b } else { d })
}

/// Is `p` within the axis-aligned box spanned by `a` and `b`?
#[inline]
pub fn in_bounding_rect(p: Vec2, a: Vec2, b: Vec2) -> bool {
    let (x1, x2) = if a.x > b.x { (b.x, a.x) } else { (a.x, b.x) };
    let (y1, y2) = if a.y > b.y { (b.y, a.y) } else { (a.y, b.y) };
    x1 <= p.x && p.x <= x2 && y1 <= p.y && p.y <= y2
}

/// Intersection point of segments `(a,b)` and `(c,d)`, if any.
///
/// Parallel segments fall back to [`parallel_segments`]; otherwise the line
/// intersection must land inside both segments' bounding boxes (guards
/// numerical overshoot past an endpoint).
pub fn segment_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    match line_intersection(a, b, c, d) {
        None => parallel_segments(a, b, c, d),
        Some(p) => {
            if in_bounding_rect(p, a, b) && in_bounding_rect(p, c, d) {
                Some(p)
            } else {
                None
            }
        }
    }
}

/// Do the closed 1D ranges `[a,b]` and `[c,d]` miss each other?
#[inline]
fn disjoint(a: f64, b: f64, c: f64, d: f64) -> bool {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let (c, d) = if c > d { (d, c) } else { (c, d) };
    b < c || d < a
}

/// Do segments `(a,b)` and `(c,d)` touch at all?
///
/// Each segment must have `c`/`d` (resp. `a`/`b`) on opposite or coincident
/// sides; the fully-collinear case (both sign products exactly zero) is
/// resolved by 1D range overlap on both axes.
pub fn segment_intersects(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let ab = orient(a, b, c) * orient(a, b, d);
    let cd = orient(c, d, a) * orient(c, d, b);
    if ab == 0.0 && cd == 0.0 {
        return !disjoint(a.x, b.x, c.x, d.x) && !disjoint(a.y, b.y, c.y, d.y);
    }
    ab <= 0.0 && cd <= 0.0
}

/// Foot of the perpendicular from `p` onto the infinite line through `a`,`b`.
///
/// Pre: `a != b`.
pub fn perpendicular_foot(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let delta = (b - a).normalize();
    a + delta * (p - a).dot(&delta)
}

/// Distance from `p` to the infinite line through `a`,`b`.
///
/// Pre: `a != b`.
pub fn point_to_line(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    (p - perpendicular_foot(p, a, b)).norm()
}

/// Area of a simple polygon (shoelace, absolute value).
///
/// Winding-independent; works for convex and non-convex simple polygons.
pub fn area(p: &[Vec2]) -> f64 {
    let mut sum = 0.0;
    for i in 0..p.len() {
        let j = (i + 1) % p.len();
        sum += p[i].x * p[j].y - p[j].x * p[i].y;
    }
    sum.abs() / 2.0
}

/// Is `q` strictly inside the simple polygon `p`? (crossing-number parity)
///
/// Behavior for `q` exactly on the boundary is undefined.
pub fn is_inside(q: Vec2, p: &[Vec2]) -> bool {
    let mut crosses = 0;
    for i in 0..p.len() {
        let j = (i + 1) % p.len();
        // Does edge (p[i], p[j]) cross q's horizontal ray?
        if (p[i].y > q.y) != (p[j].y > q.y) {
            let at_x = (p[j].x - p[i].x) * (q.y - p[i].y) / (p[j].y - p[i].y) + p[i].x;
            if q.x < at_x {
                crosses += 1;
            }
        }
    }
    crosses % 2 == 1
}

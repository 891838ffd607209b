//! Convex hulls: gift wrapping and Andrew's monotone chain.
//!
//! Both constructors return the hull counter-clockwise, starting at the
//! lexicographically smallest input point, and both exclude points that lie
//! in the interior of a hull edge. They are kept independent so either can
//! cross-check the other.
//!
//! Pre: at least three points, not all collinear. Behavior on smaller or
//! fully-collinear inputs is unspecified.

use super::primitives::{lex_cmp, lex_less, orient};
use super::{Polygon, Vec2};

/// Gift wrapping (Jarvis march), O(n·h).
///
/// From the pivot, repeatedly selects the candidate that leaves every other
/// point on the left of the new edge, which walks the hull counter-clockwise;
/// exact-collinear candidates tie-break toward the farthest one, so interior
/// collinear points never enter the hull. Terminates when the scan returns to
/// the pivot (exact endpoint equality).
pub fn gift_wrap(points: &[Vec2]) -> Polygon {
    let mut pivot = points[0];
    for p in &points[1..] {
        if lex_less(p, &pivot) {
            pivot = *p;
        }
    }

    let mut hull = vec![pivot];
    let mut last = pivot;
    loop {
        let mut next = points[0];
        for &p in &points[1..] {
            let cross = orient(last, next, p);
            let dist = (next - last).norm() - (p - last).norm();
            if cross < 0.0 || (cross == 0.0 && dist < 0.0) {
                next = p;
            }
        }
        if next == pivot {
            break;
        }
        hull.push(next);
        last = next;
    }
    hull
}

/// Andrew's monotone chain, O(n log n).
///
/// Lexicographic sort, then a lower chain left-to-right and an upper chain
/// right-to-left; clockwise-or-collinear turns are popped, so collinear edge
/// points are excluded. The duplicated chain endpoints are dropped before
/// concatenation.
pub fn monotone_chain(points: &[Vec2]) -> Polygon {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);

    let mut lower: Polygon = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && orient(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Polygon = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && orient(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

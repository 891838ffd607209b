//! Polygon-level operations: overlap test, calipers diameter, half-plane cut.

use super::primitives::{is_inside, lex_less, line_intersection, orient, segment_intersects};
use super::{Polygon, Vec2};

/// Do the polygons `p` and `q` touch or overlap at any point?
///
/// Coverage contract (callers depend on this exact pattern — do not widen):
/// - Containment is probed via `p[0] ∈ q`, `q[0] ∈ p`, and every vertex of
///   `p` against `q`; the remaining vertices of `q` are not probed.
/// - Each edge of `p` is tested against edge `(q[j], q[j+1])` and against the
///   chord `(q[j], q[j+2])` that skips one vertex, not against all pairs.
pub fn polygons_intersect(p: &[Vec2], q: &[Vec2]) -> bool {
    let n = p.len();
    let m = q.len();
    if is_inside(p[0], q) || is_inside(q[0], p) {
        return true;
    }
    for i in 0..n {
        if is_inside(p[i], q) {
            return true;
        }
    }
    // If neither contains the other, overlapping polygons must have touching
    // edges somewhere in this coverage.
    for i in 0..n {
        for j in 0..m {
            if segment_intersects(p[i], p[(i + 1) % n], q[j], q[(j + 1) % m])
                || segment_intersects(p[i], p[(i + 1) % n], q[j], q[(j + 2) % m])
            {
                return true;
            }
        }
    }
    false
}

/// Largest pairwise vertex distance of a convex polygon (rotating calipers).
///
/// Pre: `p` is convex and counter-clockwise (as produced by the hull
/// constructors).
pub fn diameter(p: &[Vec2]) -> f64 {
    let n = p.len();

    // Extreme vertices under the lexicographic order; the calipers start
    // attached there, pointing in opposite directions.
    let mut left = 0;
    let mut right = 0;
    for i in 1..n {
        if lex_less(&p[i], &p[left]) {
            left = i;
        }
        if lex_less(&p[right], &p[i]) {
            right = i;
        }
    }
    let mut calipers = Vec2::new(0.0, 1.0);
    let mut best = (p[right] - p[left]).norm();

    // to_next[i]: unit direction from p[i] to the following vertex.
    let to_next: Vec<Vec2> = (0..n).map(|i| (p[(i + 1) % n] - p[i]).normalize()).collect();

    // Advance whichever side needs the smaller rotation to reach its next
    // edge, until the two contact indices have swapped roles (a half turn).
    let (mut a, mut b) = (left, right);
    while a != right || b != left {
        let cos_a = calipers.dot(&to_next[a]);
        let cos_b = -calipers.dot(&to_next[b]);
        if cos_a > cos_b {
            calipers = to_next[a];
            a = (a + 1) % n;
        } else {
            calipers = -to_next[b];
            b = (b + 1) % n;
        }
        best = best.max((p[a] - p[b]).norm());
    }
    best
}

/// Clip `p` to the closed left half-plane of the directed line `a → b`.
///
/// Vertices on the line are kept; each edge straddling the line contributes
/// its intersection point. Returns the (possibly empty) clipped polygon.
pub fn cut(p: &[Vec2], a: Vec2, b: Vec2) -> Polygon {
    let n = p.len();
    let inside: Vec<bool> = p.iter().map(|&v| orient(a, b, v) >= 0.0).collect();
    let mut out = Polygon::new();
    for i in 0..n {
        let j = (i + 1) % n;
        if inside[i] {
            out.push(p[i]);
        }
        if inside[i] != inside[j] {
            // The edge straddles the cut line, so the two lines cannot be
            // parallel.
            if let Some(x) = line_intersection(p[i], p[j], a, b) {
                out.push(x);
            }
        }
    }
    out
}

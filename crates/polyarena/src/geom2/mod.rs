//! Strict 2D geometry for the arena core (V-representation).
//!
//! Purpose
//! - Provide the primitive predicates (orientation, segment intersection,
//!   point-in-polygon), two independent convex-hull constructors, and the
//!   polygon-level operations (overlap test, calipers diameter, half-plane
//!   cut) the collision model is built on.
//!
//! Why exact-sign predicates
//! - The collision protocol tie-breaks on the *sign* of cross products and on
//!   exact endpoint equality (hull termination, collinear-overlap handling).
//!   Orientation tests therefore compare against exact `0.0`; no epsilon is
//!   applied anywhere in this module.
//!
//! Degeneracy policy
//! - `line_intersection` returning `None` on parallel lines is the only
//!   explicit failure signal. Everything else (zero-vector normalization,
//!   boundary points in `is_inside`, polygons with fewer than three vertices)
//!   is a documented precondition, not a defended error path.
//!
//! Code cross-refs: `primitives`, `hull::{gift_wrap, monotone_chain}`,
//! `poly::{polygons_intersect, diameter, cut}`, `rand::draw_outline_radial`.

pub mod rand;

mod hull;
mod poly;
mod primitives;

pub use hull::{gift_wrap, monotone_chain};
pub use poly::{cut, diameter, polygons_intersect};
pub use primitives::{
    area, ccw, in_bounding_rect, is_inside, lex_cmp, lex_less, line_intersection, orient,
    parallel_segments, perpendicular_foot, point_to_line, polar, project, segment_intersection,
    segment_intersects,
};

/// 2D point/vector, `f64` throughout.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Ordered vertex cycle; the last vertex implicitly connects to the first.
pub type Polygon = Vec<Vec2>;

#[cfg(test)]
mod tests;

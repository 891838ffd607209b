//! Convex 2D shapes moving, bouncing, and colliding in a bounded arena.
//!
//! - `geom2`: exact-sign 2D primitives, convex hulls, polygon intersection,
//!   and the rotating-calipers diameter.
//! - `sim`: per-object kinematics, boundary bounce, and the pairwise
//!   collision/scoring protocol built on `geom2`.
//!
//! The crate is presentation-free: callers read outlines, centers, angles,
//! and scores and render them however they like. All geometry is `f64` over
//! `nalgebra::Vector2`.

pub mod geom2;
pub mod sim;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Polygon, Vec2};
pub use nalgebra::Matrix2 as Mat2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_outline_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        area, ccw, cut, diameter, gift_wrap, is_inside, line_intersection, monotone_chain, orient,
        polar, polygons_intersect, project, segment_intersection, segment_intersects, Polygon,
        Vec2,
    };
    pub use crate::sim::{Bounds, Contact, DrawMode, Object, Tick, TickSummary, World};
}

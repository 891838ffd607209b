//! Simulation objects: rigid convex shapes with velocity, score, and the
//! pairwise collision response.

use nalgebra::Matrix2;
use std::f64::consts::{PI, TAU};

use super::world::Bounds;
use crate::geom2::{monotone_chain, polygons_intersect, Polygon, Vec2};

/// Simulation time, in ticks. `0` means "never".
pub type Tick = u64;

/// Axis speed imposed when a hull vertex would leave the arena.
pub const BOUNCE_SPEED: f64 = 3.0;

/// Deflection applied to an object's orientation on contact, radians.
pub const DEFLECT_ANGLE: f64 = 0.1512502;

/// Contacts between the same pair within this many ticks resolve only once.
pub const DEBOUNCE_TICKS: Tick = 3;

/// How the presentation layer renders a shape, and whether it can score.
///
/// `Decorative` corresponds to filled shapes: they deflect partners but take
/// part in no scoring and carry no score label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Scoring,
    Decorative,
}

/// Outcome of a pairwise collision check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// No intersection, or the pair is inside the debounce window.
    None,
    /// Intersection resolved; velocities and orientations adjusted.
    Deflected,
    /// Intersection resolved and the pair was score-eligible.
    Scored,
}

/// A rigid convex shape in the arena.
///
/// Invariants:
/// - `hull` is convex and counter-clockwise, congruent to the hull computed
///   at construction; only rigid transforms (translate, rotate) ever touch
///   its vertices.
/// - `outline` is render-only and immutable after construction.
/// - Ids are assigned by the [`World`](super::World) factory; id `1` is the
///   distinguished player object whose own score never increments.
#[derive(Clone, Debug)]
pub struct Object {
    outline: Polygon,
    hull: Polygon,
    center: Vec2,
    velocity: Vec2,
    angle: f64,
    id: u32,
    mode: DrawMode,
    score: u32,
    sticky: bool,
    repulsion: Vec2,
    last_collision: Tick,
    last_effective_collision: Tick,
}

impl Object {
    /// Build an object from a raw outline; the collision hull is its convex
    /// hull. Starts at the origin with zero velocity.
    ///
    /// Pre: `outline` has at least three non-collinear points.
    pub fn new(id: u32, outline: Polygon, mode: DrawMode) -> Self {
        let hull = monotone_chain(&outline);
        Self {
            outline,
            hull,
            center: Vec2::zeros(),
            velocity: Vec2::zeros(),
            angle: 0.0,
            id,
            mode,
            score: 0,
            sticky: false,
            repulsion: Vec2::zeros(),
            last_collision: 0,
            last_effective_collision: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn center(&self) -> Vec2 {
        self.center
    }
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn draw_mode(&self) -> DrawMode {
        self.mode
    }
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }
    /// Render-only outline, in construction coordinates.
    pub fn outline(&self) -> &[Vec2] {
        &self.outline
    }
    /// Current collision hull, in arena coordinates.
    pub fn hull(&self) -> &[Vec2] {
        &self.hull
    }
    pub fn last_collision(&self) -> Tick {
        self.last_collision
    }
    pub fn last_effective_collision(&self) -> Tick {
        self.last_effective_collision
    }

    /// Convert to a sticky obstacle with the given repulsion vector. Sticky
    /// objects never move; colliding partners leave with the repulsion
    /// velocity instead (component-wise, where nonzero).
    pub fn stick(&mut self, dx: f64, dy: f64) {
        self.sticky = true;
        self.repulsion = Vec2::new(dx, dy);
    }

    pub fn set_velocity(&mut self, dx: f64, dy: f64) {
        self.velocity = Vec2::new(dx, dy);
    }

    /// Rigid translation of center and hull to the new position.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let new_center = Vec2::new(x, y);
        for p in &mut self.hull {
            *p = *p - self.center + new_center;
        }
        self.center = new_center;
    }

    /// Rigid rotation to the absolute orientation `target` (radians).
    ///
    /// Applies the delta to the velocity vector and to every hull vertex
    /// about `center`. The rotation direction follows the sign of
    /// `angle - target`.
    pub fn rotate_to(&mut self, target: f64) {
        let da = self.angle - target;
        let (s, c) = da.sin_cos();
        let rot = Matrix2::new(c, s, -s, c);
        self.velocity = rot * self.velocity;
        for p in &mut self.hull {
            *p = rot * (*p - self.center) + self.center;
        }
        self.angle = target;
    }

    /// One motion step: bounce off arena walls, then commit the translation.
    ///
    /// Every hull vertex is tested at the tentative next position; a
    /// violated wall overrides that axis's velocity with the fixed bounce
    /// speed toward the interior. Returns whether any vertex was out of
    /// bounds. Sticky objects never move and never report out-of-bounds.
    pub fn advance(&mut self, bounds: &Bounds) -> bool {
        if self.sticky {
            return false;
        }
        let mut out_of_bound = false;
        let next = self.center + self.velocity;
        for p in &self.hull {
            let q = *p - self.center + next;
            if q.x < bounds.left {
                self.velocity.x = BOUNCE_SPEED;
                out_of_bound = true;
            }
            if q.x > bounds.right {
                self.velocity.x = -BOUNCE_SPEED;
                out_of_bound = true;
            }
            if q.y > bounds.top {
                self.velocity.y = -BOUNCE_SPEED;
                out_of_bound = true;
            }
            if q.y < bounds.bot {
                self.velocity.y = BOUNCE_SPEED;
                out_of_bound = true;
            }
        }
        let next = self.center + self.velocity;
        self.move_to(next.x, next.y);
        out_of_bound
    }

    /// Resolve a potential collision with `rhs` at time `now`, from `self`'s
    /// perspective.
    ///
    /// Statement order is normative: `self`'s deflection is fully applied
    /// before `rhs` reads `self.velocity`, and a sticky `rhs` is left
    /// entirely unmodified. Scoring requires both participants non-sticky
    /// and non-decorative, and at least one of them to already score or to
    /// be the id-1 object; the id-1 object's own score never increments.
    pub fn collide(&mut self, rhs: &mut Object, now: Tick) -> Contact {
        if self.last_collision != 0
            && rhs.last_collision != 0
            && self.last_collision.abs_diff(rhs.last_collision) < DEBOUNCE_TICKS
        {
            return Contact::None;
        }
        if !polygons_intersect(&self.hull, &rhs.hull) {
            return Contact::None;
        }

        let dir = (rhs.center - self.center).x > 0.0;
        let rot = if !self.sticky {
            let rot = (self.angle + if dir { -DEFLECT_ANGLE } else { DEFLECT_ANGLE }) % TAU;
            self.rotate_to(rot);
            self.velocity = -self.velocity;
            rot
        } else {
            PI
        };

        if !rhs.sticky {
            if self.sticky {
                rhs.rotate_to((rhs.angle + PI) % TAU);
                let mut dx = -rhs.velocity.x;
                let mut dy = -rhs.velocity.y;
                if self.repulsion.x != 0.0 {
                    dx = self.repulsion.x;
                }
                if self.repulsion.y != 0.0 {
                    dy = self.repulsion.y;
                }
                rhs.set_velocity(dx, dy);
            } else {
                rhs.rotate_to(-rot);
                let rvel = rhs.velocity - self.velocity;
                rhs.set_velocity(rvel.x, rvel.y);
            }
        }

        let eligible = !rhs.sticky
            && !self.sticky
            && rhs.mode != DrawMode::Decorative
            && self.mode != DrawMode::Decorative;
        let scored =
            eligible && (rhs.score != 0 || self.score != 0 || rhs.id == 1 || self.id == 1);
        if scored {
            if rhs.id != 1 {
                rhs.score += 1;
            }
            if self.id != 1 {
                self.score += 1;
            }
            self.last_effective_collision = now;
            rhs.last_effective_collision = now;
        }

        self.last_collision = now;
        rhs.last_collision = now;
        if scored {
            Contact::Scored
        } else {
            Contact::Deflected
        }
    }
}

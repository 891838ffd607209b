//! Arena simulation: objects, motion, and the collision protocol.
//!
//! Purpose
//! - Own the per-object kinematic state (center, velocity, angle, hull) and
//!   drive it tick by tick: boundary bounce first, then pairwise collision
//!   resolution with deflection, sticky repulsion, and scoring.
//!
//! Determinism
//! - Single-threaded and tick-driven. `World::tick` completes the motion
//!   phase for every object before any pair is examined, then resolves each
//!   unordered pair exactly once, in ascending index order, from the
//!   lower-index object's perspective. Effects of one pair are visible to
//!   later pairs within the same tick.
//!
//! Code cross-refs: `object::{Object, DrawMode, Contact}`,
//! `world::{World, Bounds, TickSummary}`.

mod object;
mod world;

pub use object::{
    Contact, DrawMode, Object, Tick, BOUNCE_SPEED, DEBOUNCE_TICKS, DEFLECT_ANGLE,
};
pub use world::{Bounds, TickSummary, World};

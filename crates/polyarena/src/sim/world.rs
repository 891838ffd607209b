//! The simulation driver: object store, id counter, tick clock.

use super::object::{Contact, DrawMode, Object, Tick};
use crate::geom2::Polygon;

/// Arena rectangle. Objects bounce off these four walls.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bot: f64,
    pub top: f64,
}

/// What happened during one [`World::tick`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TickSummary {
    pub now: Tick,
    /// Objects that touched a wall this tick.
    pub out_of_bounds: u32,
    /// Pairs that intersected and were resolved.
    pub contacts: u32,
    /// Resolved pairs that also scored.
    pub effective: u32,
}

/// Owns every object plus the counters the collision protocol depends on.
///
/// Ids increase monotonically from 1, so the first spawned object is the
/// distinguished player. The tick clock starts at 1; a debounce stamp of 0
/// therefore always reads as "never collided".
pub struct World {
    objects: Vec<Object>,
    bounds: Bounds,
    next_id: u32,
    now: Tick,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            objects: Vec::new(),
            bounds,
            next_id: 0,
            now: 0,
        }
    }

    /// Construct an object from a raw outline and hand out its id.
    pub fn spawn(&mut self, outline: Polygon, mode: DrawMode) -> u32 {
        self.next_id += 1;
        self.objects.push(Object::new(self.next_id, outline, mode));
        self.next_id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    pub fn now(&self) -> Tick {
        self.now
    }
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }
    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }

    pub fn get(&self, id: u32) -> Option<&Object> {
        self.objects.iter().find(|o| o.id() == id)
    }
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Advance the simulation one step.
    ///
    /// Motion completes for every object (in spawn order) before any pair is
    /// examined; each unordered pair is then resolved exactly once, in
    /// ascending index order, from the lower-index object's perspective.
    pub fn tick(&mut self) -> TickSummary {
        self.now += 1;
        let mut summary = TickSummary {
            now: self.now,
            ..TickSummary::default()
        };
        for obj in &mut self.objects {
            if obj.advance(&self.bounds) {
                summary.out_of_bounds += 1;
            }
        }
        let n = self.objects.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // i < j, so splitting at j yields disjoint borrows.
                let (head, tail) = self.objects.split_at_mut(j);
                match head[i].collide(&mut tail[0], self.now) {
                    Contact::None => {}
                    Contact::Deflected => summary.contacts += 1,
                    Contact::Scored => {
                        summary.contacts += 1;
                        summary.effective += 1;
                    }
                }
            }
        }
        summary
    }
}

//! Falling obstacles and the fixed-capacity pool that holds them
//!
//! The pool is an arena of `MAX_NUM_OF_OBSTACLES` slots. Freed slots are
//! reused by the next spawn, so a `SlotId` is only meaningful while the
//! obstacle in it is alive.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;

/// Index of a slot in the obstacle pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub usize);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// A square obstacle falling toward the bottom of the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner in unit-square coordinates
    pub pos: DVec2,
    /// Side length as a fraction of the average field dimension
    pub size: f64,
    /// Downward distance per tick
    pub speed: f64,
}

impl Obstacle {
    pub fn new(pos: DVec2, size: f64, speed: f64) -> Self {
        Self { pos, size, speed }
    }

    /// Roll a fresh obstacle at the top edge. Draw order: x, size, speed.
    pub fn spawn(rng: &mut impl RandomSource) -> Self {
        let x = rng.uniform(0.0, 1.0);
        let size = rng.uniform(MIN_OBSTACLE_SIZE, MAX_OBSTACLE_SIZE);
        let speed = rng.uniform(MIN_OBSTACLE_SPEED, MAX_OBSTACLE_SPEED);
        Self::new(DVec2::new(x, 0.0), size, speed)
    }

    /// Move down one tick. Returns true once the obstacle has left the field.
    pub fn fall(&mut self) -> bool {
        self.pos.y += self.speed;
        self.has_exited()
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.pos.y > 1.0 - self.size
    }
}

/// Fixed-capacity obstacle arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: Vec<Option<Obstacle>>,
    count: usize,
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::with_capacity(MAX_NUM_OF_OBSTACLES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live obstacles
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.slots.len()
    }

    /// Spawn a random obstacle into the first free slot.
    ///
    /// Returns `None` without touching the RNG when every slot is taken.
    pub fn create(&mut self, rng: &mut impl RandomSource) -> Option<SlotId> {
        let free = self.first_free()?;
        self.occupy(free, Obstacle::spawn(rng));
        Some(free)
    }

    /// Place an already-built obstacle into the first free slot
    pub fn insert(&mut self, obstacle: Obstacle) -> Option<SlotId> {
        let free = self.first_free()?;
        self.occupy(free, obstacle);
        Some(free)
    }

    /// Advance every obstacle one tick, freeing those that fell out of the field.
    ///
    /// Returns one point per freed obstacle.
    pub fn advance_all(&mut self) -> u64 {
        self.advance_all_with(|_| {})
    }

    /// Same as [`advance_all`](Self::advance_all), reporting each freed slot
    pub fn advance_all_with(&mut self, mut on_exit: impl FnMut(SlotId)) -> u64 {
        let mut points = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let exited = match slot {
                Some(obstacle) => obstacle.fall(),
                None => continue,
            };
            if exited {
                *slot = None;
                self.count -= 1;
                points += 1;
                on_exit(SlotId(index));
            }
        }
        points
    }

    pub fn get(&self, id: SlotId) -> Option<&Obstacle> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Live obstacles in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Obstacle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|o| (SlotId(i), o)))
    }

    pub fn for_each_active(&self, mut visitor: impl FnMut(SlotId, &Obstacle)) {
        for (id, obstacle) in self.iter() {
            visitor(id, obstacle);
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
    }

    fn first_free(&self) -> Option<SlotId> {
        self.slots.iter().position(Option::is_none).map(SlotId)
    }

    fn occupy(&mut self, id: SlotId, obstacle: Obstacle) {
        debug_assert!(self.slots[id.0].is_none());
        self.slots[id.0] = Some(obstacle);
        self.count += 1;
    }
}

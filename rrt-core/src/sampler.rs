//! Growth-target sources.
//!
//! The growth step never reaches for a process-wide random source; it
//! draws targets from a [`Sampler`] handed in by the caller. That keeps a
//! run reproducible: seed a [`UniformSampler`] for a repeatable random
//! session, or replay exact points with a [`ScriptedSampler`].

use crate::config::Domain;
use glam::Vec2;
use rand::Rng;

/// A source of candidate growth targets within a sampling domain.
pub trait Sampler {
    /// Produces the next growth target inside `domain`.
    fn sample(&mut self, domain: &Domain) -> Vec2;
}

/// Uniform sampler over the domain rectangle, backed by any [`Rng`].
#[derive(Debug)]
pub struct UniformSampler<R> {
    pub rng: R,
}

impl<R: Rng> UniformSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for UniformSampler<R> {
    fn sample(&mut self, domain: &Domain) -> Vec2 {
        domain.sample(&mut self.rng)
    }
}

/// Replays a fixed sequence of points, cycling once exhausted.
///
/// The domain argument is ignored; the scripted points are taken as-is.
///
/// ### Panics
/// [`Sampler::sample`] panics if the point list is empty.
#[derive(Debug)]
pub struct ScriptedSampler {
    points: Vec<Vec2>,
    next: usize,
}

impl ScriptedSampler {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points, next: 0 }
    }
}

impl Sampler for ScriptedSampler {
    fn sample(&mut self, _domain: &Domain) -> Vec2 {
        let p = self.points[self.next % self.points.len()];
        self.next += 1;
        p
    }
}

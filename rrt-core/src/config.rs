use glam::Vec2;
use rand::Rng;

/// Rectangular sampling region with independent half-open coordinate
/// ranges `[min.x, max.x)` and `[min.y, max.y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: Vec2,
    pub max: Vec2,
}

impl Domain {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Draws a point uniformly from the domain, each axis independent.
    ///
    /// Both axis ranges must be nonempty (`min < max`).
    pub fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(self.min.x..self.max.x),
            rng.random_range(self.min.y..self.max.y),
        )
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(800.0, 600.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Position of the root node a growth session starts from.
    pub root: Vec2,
    /// Region growth targets are sampled from.
    pub domain: Domain,
    /// Lower bound on the step distance. Accepted alongside `max_step`
    /// but not applied in the steering decision.
    // TODO: reject samples whose nearest-node distance falls below min_step.
    pub min_step: f32,
    /// Upper bound on how far a new node may land from its parent.
    pub max_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Vec2::new(400.0, 300.0),
            domain: Domain::default(),
            min_step: 10.0,
            max_step: 20.0,
        }
    }
}

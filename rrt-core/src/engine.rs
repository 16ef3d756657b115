//! Growth session handle tying tree, configuration, and sampler together.

use crate::{config::Config, error::EmptyTreeError, growth, sampler::Sampler, tree::Tree};
use glam::Vec2;

/// A grown edge, reported by coordinates for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub parent: Vec2,
    pub child: Vec2,
}

/// An incremental RRT growth session.
///
/// Owns the tree (rooted at `cfg.root`), the configuration, and the
/// sampler. [`Rrt::advance`] grows by at most one node per call; the
/// caller owns the loop and decides when to stop, there is no terminal
/// condition in the session itself.
#[derive(Debug)]
pub struct Rrt<S> {
    pub tree: Tree,
    pub cfg: Config,
    pub sampler: S,
}

impl<S: Sampler> Rrt<S> {
    pub fn new(cfg: Config, sampler: S) -> Self {
        Self {
            tree: Tree::new(cfg.root),
            cfg,
            sampler,
        }
    }

    /// Advances the tree by one growth step.
    ///
    /// ### Returns
    /// - `Ok(Some(edge))` - the tree was extended; `edge` carries the
    ///   parent and child coordinates of the new segment.
    /// - `Ok(None)` - the sampled target coincided with an existing node;
    ///   nothing was inserted.
    /// - `Err(EmptyTreeError)` - the node arena was emptied externally.
    pub fn advance(&mut self) -> Result<Option<Edge>, EmptyTreeError> {
        let Some((parent, child)) = growth::grow_step(&mut self.tree, &self.cfg, &mut self.sampler)?
        else {
            return Ok(None);
        };

        Ok(Some(Edge {
            parent: self.tree.nodes[parent].pos,
            child: self.tree.nodes[child].pos,
        }))
    }
}

use crate::error::EmptyTreeError;
use crate::types::NodeId;
use glam::Vec2;

#[derive(Debug)]
pub struct TreeNode {
    pub pos: Vec2,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new_root(pos: Vec2) -> Self {
        Self {
            pos,
            parent: None,
            children: Vec::with_capacity(4),
        }
    }

    pub fn new_child(pos: Vec2, parent: NodeId) -> Self {
        Self {
            pos,
            parent: Some(parent),
            children: Vec::with_capacity(4),
        }
    }
}

impl Tree {
    pub fn new(root_pos: Vec2) -> Self {
        Self {
            nodes: vec![TreeNode::new_root(root_pos)],
        }
    }

    pub fn insert(&mut self, parent: NodeId, pos: Vec2) -> NodeId {
        let id: usize = self.nodes.len();
        self.nodes.push(TreeNode::new_child(pos, parent));
        self.nodes[parent].children.push(id);
        id
    }

    /// Linear scan for the node closest to `pos`.
    ///
    /// Equidistant nodes resolve to the earlier-inserted one (strict `<`
    /// against the running minimum). Returns the winning id together with
    /// the true Euclidean distance.
    pub fn nearest(&self, pos: Vec2) -> Result<(NodeId, f32), EmptyTreeError> {
        if self.nodes.is_empty() {
            return Err(EmptyTreeError);
        }
        let mut best = 0;
        let mut best_d2 = f32::MAX;
        for (id, n) in self.nodes.iter().enumerate() {
            let d2 = (n.pos - pos).length_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = id;
            }
        }
        Ok((best, best_d2.sqrt()))
    }
}

use crate::node::{Node, NodeId};

/// Caller-owned node arena.
///
/// The tree owns node storage and nothing else; wiring is expressed through
/// [`NodeId`] indices, so parents never own their children and the
/// structure can live in a single flat allocation built once at startup.
#[derive(Debug, Default)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) ticks: u64,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `node` in the arena and returns its id.
    pub fn insert(&mut self, node: Node) -> NodeId {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "tree arena exceeds NodeId range"
        );
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.to_raw() as usize)
    }

    /// Mutable access, used to wire `on_enter`/`on_exit` after insertion.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.to_raw() as usize)
    }

    /// Number of completed root [`tick`](Tree::tick) calls. A tick ordinal,
    /// not a clock.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the subtree under `root` to the never-ticked state: statuses
    /// cleared, cursors back to 0. No hooks fire. Unresolvable ids in the
    /// walk are skipped; revisits are guarded, so cyclic wiring terminates.
    pub fn reset(&mut self, root: NodeId) {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(index) = self.index_of(id) else {
                continue;
            };
            if visited[index] {
                continue;
            }
            visited[index] = true;
            let node = &mut self.nodes[index];
            node.status = None;
            node.cursor = 0;
            stack.extend(node.children.iter().copied());
        }
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        let index = id.to_raw() as usize;
        (index < self.nodes.len()).then_some(index)
    }
}

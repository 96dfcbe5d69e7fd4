use thiserror::Error;

use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;

/// Structural problem found by [`Tree::validate`].
///
/// These are the construction-time faces of the tick-path `Error` taxonomy:
/// wiring that validation rejects would otherwise surface as per-tick
/// `Status::Error` results (or, for cycles, as unbounded recursion).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("root {0:?} does not resolve to a node")]
    UnknownRoot(NodeId),

    #[error("child slot {slot} of {node:?} does not resolve to a node")]
    DanglingChild { node: NodeId, slot: usize },

    #[error("{node:?} is an inverter with {children} children, expected exactly 1")]
    InverterArity { node: NodeId, children: usize },

    #[error("{node:?} is a leaf with no tick callback")]
    MissingCallback { node: NodeId },

    #[error("{node:?} is a leaf with children")]
    LeafWithChildren { node: NodeId },

    #[error("{node:?} is reachable from itself")]
    Cycle { node: NodeId },
}

impl Tree {
    /// Pre-flight structural check of the subtree under `root`.
    ///
    /// Optional: ticking never validates, it reports malformed wiring as
    /// `Status::Error` per node instead. Callers that prefer to fail before
    /// the control loop starts run this once after construction. Sharing a
    /// node between parents is accepted; a cycle is not, since `tick`
    /// recursion assumes the child graph is acyclic.
    pub fn validate(&self, root: NodeId) -> Result<(), TreeError> {
        const FRESH: u8 = 0;
        const ON_PATH: u8 = 1;
        const DONE: u8 = 2;

        let root_index = self.index_of(root).ok_or(TreeError::UnknownRoot(root))?;

        let mut state = vec![FRESH; self.len()];
        let mut stack = vec![(root_index, true)];

        while let Some((index, entering)) = stack.pop() {
            if !entering {
                state[index] = DONE;
                continue;
            }
            if state[index] != FRESH {
                continue;
            }
            state[index] = ON_PATH;
            stack.push((index, false));

            let id = NodeId::from_raw(index as u32);
            let node = &self.nodes[index];
            match node.kind {
                NodeKind::Action | NodeKind::Condition => {
                    if node.tick_fn.is_none() {
                        return Err(TreeError::MissingCallback { node: id });
                    }
                    if !node.children.is_empty() {
                        return Err(TreeError::LeafWithChildren { node: id });
                    }
                }
                NodeKind::Inverter => {
                    if node.children.len() != 1 {
                        return Err(TreeError::InverterArity {
                            node: id,
                            children: node.children.len(),
                        });
                    }
                }
                NodeKind::Sequence | NodeKind::Selector => {}
            }

            let mut child_indices = Vec::with_capacity(node.children.len());
            for (slot, &child) in node.children.iter().enumerate() {
                let Some(child_index) = self.index_of(child) else {
                    return Err(TreeError::DanglingChild { node: id, slot });
                };
                if state[child_index] == ON_PATH {
                    return Err(TreeError::Cycle { node: child });
                }
                child_indices.push(child_index);
            }
            // Reverse push keeps the walk in slot order.
            for &child_index in child_indices.iter().rev() {
                if state[child_index] == FRESH {
                    stack.push((child_index, true));
                }
            }
        }

        Ok(())
    }
}

use std::any::Any;
use std::fmt;

use reflex_core::{NodeCtx, Status};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tick callback for Action/Condition leaves.
///
/// The returned status is stored verbatim; the engine performs no
/// interpretation, so a leaf may yield any of the four values including
/// `Error`.
pub type LeafFn = Box<dyn FnMut(&mut NodeCtx<'_>) -> Status>;

/// Lifecycle hook fired at episode boundaries of composites and decorators.
pub type HookFn = Box<dyn FnMut(&mut NodeCtx<'_>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// Leaf performing work.
    Action,
    /// Leaf testing a predicate.
    Condition,
    /// Composite: children in order until one stops advancing (AND).
    Sequence,
    /// Composite: children in order until one succeeds (OR).
    Selector,
    /// Decorator: swaps its single child's Success and Failure.
    Inverter,
}

/// Index of a node inside a [`Tree`](crate::Tree) arena.
///
/// Ids are plain indices and carry no liveness information; an id that does
/// not resolve inside the arena it is used against behaves as a dangling
/// reference and ticks to `Error`. `from_raw` exists so children can be
/// wired before their targets are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    pub fn to_raw(self) -> u32 {
        self.0
    }
}

/// A single behavior tree node.
///
/// Kind and children are fixed at construction; only `status` and `cursor`
/// mutate afterwards, and only by ticking (or [`Tree::reset`]). The hook
/// slots are plain public fields wired directly by the caller after
/// insertion.
///
/// [`Tree::reset`]: crate::Tree::reset
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) tick_fn: Option<LeafFn>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) status: Option<Status>,
    pub(crate) cursor: usize,
    /// Fired when a composite/decorator begins a fresh episode. Inert on leaves.
    pub on_enter: Option<HookFn>,
    /// Fired when a composite/decorator episode reaches a terminal status. Inert on leaves.
    pub on_exit: Option<HookFn>,
    pub(crate) user_data: Option<Box<dyn Any>>,
}

impl Node {
    /// General constructor; the kind-specific constructors below are the
    /// usual entry points.
    pub fn new(
        kind: NodeKind,
        tick_fn: Option<LeafFn>,
        children: Vec<NodeId>,
        user_data: Option<Box<dyn Any>>,
    ) -> Self {
        Self {
            kind,
            tick_fn,
            children,
            status: None,
            cursor: 0,
            on_enter: None,
            on_exit: None,
            user_data,
        }
    }

    pub fn action(tick_fn: impl FnMut(&mut NodeCtx<'_>) -> Status + 'static) -> Self {
        Self::new(NodeKind::Action, Some(Box::new(tick_fn)), Vec::new(), None)
    }

    pub fn condition(tick_fn: impl FnMut(&mut NodeCtx<'_>) -> Status + 'static) -> Self {
        Self::new(
            NodeKind::Condition,
            Some(Box::new(tick_fn)),
            Vec::new(),
            None,
        )
    }

    /// A sequence with zero children is legal and ticks to a vacuous Success.
    pub fn sequence(children: Vec<NodeId>) -> Self {
        Self::new(NodeKind::Sequence, None, children, None)
    }

    /// A selector with zero children is legal and ticks to a vacuous Failure.
    pub fn selector(children: Vec<NodeId>) -> Self {
        Self::new(NodeKind::Selector, None, children, None)
    }

    pub fn inverter(child: NodeId) -> Self {
        Self::new(NodeKind::Inverter, None, vec![child], None)
    }

    /// Attaches read-only configuration, surfaced to the node's callbacks
    /// through [`NodeCtx::user_data`].
    pub fn with_user_data(mut self, data: impl Any) -> Self {
        self.user_data = Some(Box::new(data));
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Result of the most recent tick; `None` until the node is first ticked.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Child index where iteration resumes; always in `[0, children.len()]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("status", &self.status)
            .field("cursor", &self.cursor)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

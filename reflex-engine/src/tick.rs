//! Tick dispatch and the per-kind resumable state machines.

use reflex_core::{Blackboard, NodeCtx, Status};
use reflex_tools::{emit, TraceEvent};

use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;

impl Tree {
    /// Ticks the subtree under `root` once for the current control cycle.
    ///
    /// The traversal is synchronous and depth-first; it runs to completion
    /// before returning, bounded by tree depth and the cost of leaf
    /// callbacks. Each visited node's result is persisted in its `status`
    /// so the next call can distinguish a fresh episode from a resumption.
    ///
    /// A `root` that does not resolve inside this arena yields
    /// `Status::Error` with no side effect: nothing is written and the
    /// tick ordinal does not advance.
    pub fn tick(&mut self, root: NodeId, blackboard: &mut Blackboard) -> Status {
        let Some(index) = self.index_of(root) else {
            return Status::Error;
        };
        let status = self.dispatch(index, blackboard);
        self.ticks += 1;
        status
    }

    fn dispatch(&mut self, index: usize, blackboard: &mut Blackboard) -> Status {
        match self.nodes[index].kind {
            NodeKind::Action | NodeKind::Condition => self.tick_leaf(index, blackboard),
            NodeKind::Sequence => self.tick_sequence(index, blackboard),
            NodeKind::Selector => self.tick_selector(index, blackboard),
            NodeKind::Inverter => self.tick_inverter(index, blackboard),
        }
    }

    /// A child id that does not resolve ticks to `Error` like any other
    /// invalid reference.
    fn tick_child(&mut self, child: NodeId, blackboard: &mut Blackboard) -> Status {
        match self.index_of(child) {
            Some(index) => self.dispatch(index, blackboard),
            None => Status::Error,
        }
    }

    fn tick_leaf(&mut self, index: usize, blackboard: &mut Blackboard) -> Status {
        let node = &mut self.nodes[index];
        let result = match node.tick_fn.as_mut() {
            Some(tick_fn) => {
                let mut ctx = NodeCtx::new(blackboard, node.user_data.as_deref());
                tick_fn(&mut ctx)
            }
            // Leaf without a callback is malformed.
            None => Status::Error,
        };
        node.status = Some(result);
        result
    }

    fn tick_sequence(&mut self, index: usize, blackboard: &mut Blackboard) -> Status {
        if self.nodes[index].status != Some(Status::Running) {
            self.nodes[index].cursor = 0;
            self.fire_enter(index, blackboard);
        }

        // Assume success; only a child that stops the walk overrides it, so
        // zero children exhaust vacuously to Success.
        let mut result = Status::Success;

        while self.nodes[index].cursor < self.nodes[index].children.len() {
            let at = self.nodes[index].cursor;
            let child = self.nodes[index].children[at];
            match self.tick_child(child, blackboard) {
                Status::Success => self.nodes[index].cursor = at + 1,
                // Running, Failure and Error all stop with the cursor left
                // on the current child; Running resumes there next tick.
                stop => {
                    result = stop;
                    break;
                }
            }
        }

        self.nodes[index].status = Some(result);
        if result.is_terminal() {
            self.fire_exit(index, result, blackboard);
        }
        result
    }

    fn tick_selector(&mut self, index: usize, blackboard: &mut Blackboard) -> Status {
        if self.nodes[index].status != Some(Status::Running) {
            self.nodes[index].cursor = 0;
            self.fire_enter(index, blackboard);
        }

        // Assume failure; zero children exhaust vacuously to Failure.
        let mut result = Status::Failure;

        while self.nodes[index].cursor < self.nodes[index].children.len() {
            let at = self.nodes[index].cursor;
            let child = self.nodes[index].children[at];
            match self.tick_child(child, blackboard) {
                // Only an ordinary Failure tries the next child. An Error
                // stops the walk immediately, same as in a sequence.
                Status::Failure => self.nodes[index].cursor = at + 1,
                stop => {
                    result = stop;
                    break;
                }
            }
        }

        self.nodes[index].status = Some(result);
        if result.is_terminal() {
            self.fire_exit(index, result, blackboard);
        }
        result
    }

    fn tick_inverter(&mut self, index: usize, blackboard: &mut Blackboard) -> Status {
        // Arity is a precondition: anything but exactly one child makes
        // every tick an Error without touching a child, and without hooks.
        if self.nodes[index].children.len() != 1 {
            self.nodes[index].status = Some(Status::Error);
            return Status::Error;
        }

        if self.nodes[index].status != Some(Status::Running) {
            self.fire_enter(index, blackboard);
        }

        let child = self.nodes[index].children[0];
        let result = self.tick_child(child, blackboard).invert();

        self.nodes[index].status = Some(result);
        if result.is_terminal() {
            self.fire_exit(index, result, blackboard);
        }
        result
    }

    fn fire_enter(&mut self, index: usize, blackboard: &mut Blackboard) {
        emit(
            blackboard,
            TraceEvent::new(self.ticks, "bt.episode.enter").with_node(index as u64),
        );
        let node = &mut self.nodes[index];
        if let Some(hook) = node.on_enter.as_mut() {
            let mut ctx = NodeCtx::new(blackboard, node.user_data.as_deref());
            hook(&mut ctx);
        }
    }

    /// Fires after the terminal status has been written, once per episode.
    fn fire_exit(&mut self, index: usize, status: Status, blackboard: &mut Blackboard) {
        emit(
            blackboard,
            TraceEvent::new(self.ticks, "bt.episode.exit")
                .with_node(index as u64)
                .with_detail(status.code() as u64),
        );
        let node = &mut self.nodes[index];
        if let Some(hook) = node.on_exit.as_mut() {
            let mut ctx = NodeCtx::new(blackboard, node.user_data.as_deref());
            hook(&mut ctx);
        }
    }
}

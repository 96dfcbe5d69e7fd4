use reflex_core::{Blackboard, Status};

use crate::node::NodeId;
use crate::tree::Tree;

/// Cadence configuration for a [`Runner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Tick the tree every N driver cycles.
    pub tick_every: u32,
    /// Cycle offset within the `tick_every` window.
    pub tick_offset: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_every: 1,
            tick_offset: 0,
        }
    }
}

impl RunnerConfig {
    /// Derives a deterministic offset from `slot` so a fleet of runners
    /// with the same cadence spreads its tree evaluations across cycles.
    pub fn staggered(slot: u64, tick_every: u32) -> Self {
        let every = tick_every.max(1);
        Self {
            tick_every: every,
            tick_offset: (slot % (every as u64)) as u32,
        }
    }

    pub fn should_tick(&self, cycle: u64) -> bool {
        let every = self.tick_every.max(1) as u64;
        ((cycle + (self.tick_offset as u64)) % every) == 0
    }
}

/// Driver convenience owning a tree, its root and its blackboard.
///
/// The runner adds no semantics to the engine; it is the shape the external
/// control loop usually takes: call [`Runner::tick`] once per cycle and let
/// the cadence config decide which cycles actually evaluate the tree. The
/// fields are public so callers can reach the blackboard and tree between
/// cycles.
pub struct Runner {
    pub tree: Tree,
    pub root: NodeId,
    pub blackboard: Blackboard,
    pub config: RunnerConfig,
    cycle: u64,
    last: Status,
}

impl Runner {
    pub fn new(tree: Tree, root: NodeId) -> Self {
        Self {
            tree,
            root,
            blackboard: Blackboard::new(),
            config: RunnerConfig::default(),
            cycle: 0,
            last: Status::Running,
        }
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Advances one driver cycle. On cycles the cadence selects, ticks the
    /// root and records the result; on skipped cycles the last recorded
    /// status is returned unchanged (`Running` before the first real tick).
    pub fn tick(&mut self) -> Status {
        let cycle = self.cycle;
        self.cycle += 1;
        if self.config.should_tick(cycle) {
            self.last = self.tree.tick(self.root, &mut self.blackboard);
        }
        self.last
    }

    pub fn last_status(&self) -> Status {
        self.last
    }

    /// Driver cycles consumed so far, including skipped ones.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

//! Tick-driven behavior tree engine built on `reflex-core`.
//!
//! Nodes live in a caller-owned [`Tree`] arena and reference their children
//! by [`NodeId`] index; the engine never allocates on the tick path and
//! never owns a child beyond the arena storage itself. One call to
//! [`Tree::tick`] performs a complete depth-first traversal for the current
//! control cycle; multi-cycle work is expressed by returning
//! [`Status::Running`](reflex_core::Status::Running) and resuming from a
//! persisted cursor on the next call.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod node;
pub mod runner;
pub mod tick;
pub mod tree;
pub mod validate;

pub use node::{HookFn, LeafFn, Node, NodeId, NodeKind};
pub use runner::{Runner, RunnerConfig};
pub use tree::Tree;
pub use validate::TreeError;

//! Deterministic, platform-agnostic primitives for tick-driven control trees.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod ctx;
pub mod status;

pub use blackboard::{BbKey, Blackboard};
pub use ctx::NodeCtx;
pub use status::Status;

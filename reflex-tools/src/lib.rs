//! Tooling primitives for deterministic control trees.
//!
//! This crate is intentionally lightweight and platform-agnostic. Transport
//! of recorded traces (serial console, log files, telemetry links) belongs
//! in dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    emit, NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink, TRACE_LOG, TRACE_SINK,
};

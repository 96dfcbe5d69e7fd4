#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of ticking a node for one control cycle.
///
/// `Running` is the only non-terminal value: a node that returns it expects
/// to be ticked again on a later cycle and resume where it left off.
/// `Error` marks invalid usage (dangling references, malformed nodes) and
/// propagates as an ordinary value, never as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Success,
    Failure,
    Running,
    Error,
}

impl Status {
    /// Success or Failure or Error; everything except `Running`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps Success and Failure; Running and Error pass through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    /// Stable byte encoding, used as trace payloads and for logs.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Running => 2,
            Status::Error => 255,
        }
    }
}

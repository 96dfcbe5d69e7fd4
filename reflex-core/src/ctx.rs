use std::any::Any;

use crate::Blackboard;

/// Borrow handle handed to leaf callbacks and lifecycle hooks for the
/// duration of one invocation.
///
/// The blackboard is shared and mutable; `user_data` is the invoked node's
/// own read-only configuration. Neither borrow outlives the invocation, so
/// a callback can never alias tree state the engine is iterating.
pub struct NodeCtx<'a> {
    blackboard: &'a mut Blackboard,
    user_data: Option<&'a dyn Any>,
}

impl<'a> NodeCtx<'a> {
    pub fn new(blackboard: &'a mut Blackboard, user_data: Option<&'a dyn Any>) -> Self {
        Self {
            blackboard,
            user_data,
        }
    }

    pub fn blackboard(&mut self) -> &mut Blackboard {
        self.blackboard
    }

    /// The invoked node's configuration, downcast to `T`.
    ///
    /// Returns `None` when the node carries no user data or when the stored
    /// type is not `T`.
    pub fn user_data<T: 'static>(&self) -> Option<&T> {
        self.user_data?.downcast_ref::<T>()
    }
}

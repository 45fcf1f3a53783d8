//! Contract violations of the dispatch framework.
//!
//! None of these are recoverable: a functional handed the wrong blocks or
//! a statistics merge over mismatched subscriptions is a programming
//! error, and the run stops at the point of violation via [`DispatchViolation::raise`].
//! The fallible `try_*` accessors return the same type for callers that
//! want to probe a block list before committing to a cast.

use crate::block::BlockKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchViolation {
    #[error("expected a {expected} block, found a {found} block")]
    KindMismatch {
        expected: BlockKind,
        found: BlockKind,
    },

    #[error("functional expects {expected} blocks, received {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("no blocks were handed to the dispatcher")]
    EmptyBlockList,

    #[error("no handler for surface region {region}")]
    UnhandledRegion { region: String },

    #[error("combined statistics have different subscriptions")]
    SubscriptionMismatch,
}

impl DispatchViolation {
    /// Abort the current call chain with this violation.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{}", self)
    }
}

/// Failures reported by [`BoundedStack`](crate::BoundedStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// A stack must be able to hold at least one value.
    #[error("invalid capacity: must be at least 1")]
    InvalidCapacity,

    /// Push attempted on a full stack. The stack is unchanged.
    #[error("stack is full (capacity {capacity})")]
    Full {
        /// Capacity of the stack that rejected the push.
        capacity: usize,
    },

    /// The slot storage for `capacity` values couldn't be allocated.
    #[error("cannot allocate storage for {capacity} values")]
    OutOfMemory {
        /// Capacity that was requested.
        capacity: usize,
    },

    /// Pop attempted on an empty stack. The stack is unchanged.
    #[error("stack is empty")]
    Empty,
}

impl StackError {
    /// `Full` and `Empty` leave the stack usable; `InvalidCapacity` and
    /// `OutOfMemory` mean there is no stack at all.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Full { .. } | Self::Empty)
    }
}

pub type Result<T> = std::result::Result<T, StackError>;

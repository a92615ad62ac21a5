use std::fmt::{self, Debug};

use tracing::{debug, trace};

use crate::{Result, StackError, Value};

/// A LIFO of [`Value`]s that never holds more than `capacity` entries.
///
/// The stack owns every stored value until it is popped, at which point the
/// caller owns it.
pub struct BoundedStack {
    values: Vec<Value>,
    capacity: usize,
}

impl BoundedStack {
    /// Reserve room for `capacity` values up front; the stack never grows.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity);
        }
        debug!(capacity, "creating bounded stack");
        let mut values = Vec::<Value>::new();
        values.try_reserve_exact(capacity).map_err(|error| {
            debug!(capacity, %error, "cannot reserve slot storage");
            StackError::OutOfMemory { capacity }
        })?;
        Ok(Self { values, capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values currently stored.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    /// Store `value` on top. Borrowed input (`&str`, `&[u8]`) is copied;
    /// owned input is moved in.
    ///
    /// On [`StackError::Full`] the value is dropped and the stack is untouched.
    /// Use [`try_push`](Self::try_push) to get a rejected value back.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.try_push(value.into()).map_err(|_rejected| StackError::Full {
            capacity: self.capacity,
        })
    }

    /// Like `push`, but a full stack hands `value` back to the caller.
    pub fn try_push(&mut self, value: Value) -> std::result::Result<(), Value> {
        if self.is_full() {
            debug!(capacity = self.capacity, "push rejected: stack is full");
            return Err(value);
        }
        trace!(len = value.len(), size = self.values.len() + 1, "push");
        self.values.push(value);
        Ok(())
    }

    /// Remove the top value and hand it to the caller.
    pub fn pop(&mut self) -> Result<Value> {
        let Some(value) = self.values.pop() else {
            debug!("pop rejected: stack is empty");
            return Err(StackError::Empty);
        };
        trace!(len = value.len(), size = self.values.len(), "pop");
        Ok(value)
    }

    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Release every stored value, top first. A no-op on an empty stack.
    pub fn clear(&mut self) {
        if self.values.is_empty() {
            return;
        }
        debug!(released = self.values.len(), "clearing stack");
        while self.values.pop().is_some() {}
    }

    /// Clear, then release the slot storage itself.
    pub fn destroy(mut self) {
        self.clear();
        debug!(capacity = self.capacity, "destroying bounded stack");
    }
}

impl Debug for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity)
            .field("values", &self.values)
            .finish()
    }
}

//! A fixed-capacity LIFO stack over owned byte buffers.
//!
//! ```
//! use bounded_stack::{BoundedStack, StackError};
//!
//! let mut stack = BoundedStack::new(2)?;
//! stack.push("a")?;
//! stack.push("b")?;
//! assert_eq!(stack.push("c"), Err(StackError::Full { capacity: 2 }));
//! assert_eq!(stack.pop()?.as_bytes(), b"b");
//! # Ok::<(), StackError>(())
//! ```

mod debug;
mod error;
mod stack;
mod value;

pub use error::{Result, StackError};
pub use stack::BoundedStack;
pub use value::Value;

//! FIFO async lock for a shared conversation.
//!
//! Callers that share one DDE conversation (and the buffer behind it)
//! acquire [`AwaitLock`] before touching it and release it afterwards.
//! Waiters are granted strictly in arrival order, each on a later scheduler
//! turn, and can be abandoned all at once with [`AwaitLock::reset`].

pub mod error;
pub mod lock;

pub use error::{LockError, Result};
pub use lock::{Acquire, AwaitLock, AwaitLockGuard};

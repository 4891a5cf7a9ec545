/// Errors surfaced to lock waiters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LockError {
    /// The wait was abandoned by [`AwaitLock::reset`](crate::AwaitLock::reset).
    #[error("lock reset while waiting")]
    Reset,
}

pub type Result<T> = std::result::Result<T, LockError>;

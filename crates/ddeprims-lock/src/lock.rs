use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::debug;

use crate::error::{LockError, Result};

type Waiter = oneshot::Sender<Result<()>>;

#[derive(Debug, Default)]
struct LockState {
    held: bool,
    queue: VecDeque<Waiter>,
}

/// Exclusive async lock with strict FIFO hand-off.
///
/// At most one caller holds the lock. Callers arriving while it is held are
/// queued and granted in arrival order. A grant is delivered through a
/// oneshot channel, so the new holder resumes on a later scheduler turn and
/// never inside [`release`](Self::release).
///
/// There is no timeout. Wrap [`acquire`](Self::acquire) in
/// `tokio::time::timeout` when bounded waiting is needed.
#[derive(Debug, Default)]
pub struct AwaitLock {
    state: Mutex<LockState>,
}

impl AwaitLock {
    /// Create an unheld lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the lock.
    ///
    /// The caller's place in line is taken here, synchronously, not when the
    /// returned future is first polled. The future resolves `Ok(())` once the
    /// lock is granted, or `Err(LockError::Reset)` if the wait is abandoned.
    pub fn acquire(&self) -> Acquire<'_> {
        let mut state = self.state();
        let pending = if state.held {
            let (tx, rx) = oneshot::channel();
            state.queue.push_back(tx);
            debug!(queued = state.queue.len(), "lock held, queueing waiter");
            Pending::Waiting(rx)
        } else {
            state.held = true;
            Pending::Granted
        };
        Acquire {
            lock: self,
            pending,
        }
    }

    /// Acquire the lock and return a guard that releases it on drop.
    pub async fn lock(&self) -> Result<AwaitLockGuard<'_>> {
        self.acquire().await?;
        Ok(AwaitLockGuard { lock: self })
    }

    /// Hand the lock to the oldest waiter, or unlock if nobody is waiting.
    ///
    /// Must only be called by the current holder. Waiters whose `Acquire`
    /// future has been dropped are skipped.
    pub fn release(&self) {
        let mut state = self.state();
        while let Some(waiter) = state.queue.pop_front() {
            if waiter.send(Ok(())).is_ok() {
                debug!(queued = state.queue.len(), "lock handed to next waiter");
                return;
            }
            debug!("skipping abandoned waiter");
        }
        state.held = false;
    }

    /// Fail every queued waiter with [`LockError::Reset`].
    ///
    /// The current holder keeps the lock: this only empties the queue.
    pub fn reset(&self) {
        let waiters = std::mem::take(&mut self.state().queue);
        debug!(abandoned = waiters.len(), "resetting lock waiters");
        for waiter in waiters {
            // A closed receiver means the waiter already gave up.
            let _ = waiter.send(Err(LockError::Reset));
        }
    }

    /// True while some caller holds the lock (or a grant is in flight).
    pub fn is_locked(&self) -> bool {
        self.state().held
    }

    /// Number of live waiters in the queue.
    pub fn queued(&self) -> usize {
        self.state()
            .queue
            .iter()
            .filter(|waiter| !waiter.is_closed())
            .count()
    }

    fn state(&self) -> MutexGuard<'_, LockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
enum Pending {
    Granted,
    Waiting(oneshot::Receiver<Result<()>>),
    Done,
}

/// Future returned by [`AwaitLock::acquire`].
///
/// Dropping it before completion gives up the place in line. A grant that
/// was already delivered is passed on to the next waiter.
#[derive(Debug)]
#[must_use = "the lock is queued for this caller until the future is awaited or dropped"]
pub struct Acquire<'a> {
    lock: &'a AwaitLock,
    pending: Pending,
}

impl Future for Acquire<'_> {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = match &mut self.pending {
            Pending::Granted => Ok(()),
            Pending::Waiting(rx) => match Pin::new(rx).poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(outcome)) => outcome,
                Poll::Ready(Err(_)) => Err(LockError::Reset),
            },
            Pending::Done => panic!("`Acquire` polled after completion"),
        };
        self.pending = Pending::Done;
        Poll::Ready(outcome)
    }
}

impl Drop for Acquire<'_> {
    fn drop(&mut self) {
        match std::mem::replace(&mut self.pending, Pending::Done) {
            Pending::Granted => self.lock.release(),
            Pending::Waiting(mut rx) => {
                rx.close();
                if let Ok(Ok(())) = rx.try_recv() {
                    debug!("waiter dropped with grant in flight, passing lock on");
                    self.lock.release();
                }
            }
            Pending::Done => {}
        }
    }
}

/// Releases the [`AwaitLock`] when dropped.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct AwaitLockGuard<'a> {
    lock: &'a AwaitLock,
}

impl Drop for AwaitLockGuard<'_> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

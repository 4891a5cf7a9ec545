//! Wire codecs and FIFO locking for bridges to legacy DDE peers.
//!
//! A bridge talking to a NetDDE-style peer shares one conversation buffer
//! between many callers. The usual pattern is to acquire the lock, run codec
//! operations on the buffer, then release.
//!
//! # Crate Structure
//!
//! - [`codec`]: Length-prefixed string fields and clipboard format rules
//! - [`lock`]: FIFO async lock (behind the default `lock` feature)

/// Re-export codec types.
pub mod codec {
    pub use ddeprims_codec::*;
}

/// Re-export lock types (requires `lock` feature).
#[cfg(feature = "lock")]
pub mod lock {
    pub use ddeprims_lock::*;
}

//! A buddy-system page allocator over caller-supplied memory regions.
//!
//! [`BuddyArena`] manages a contiguous region of fixed-size pages owned
//! by the host. Blocks are handed out in power-of-two page runs: a
//! block of *rank* `r` spans `1 << (r - 1)` pages and starts on an
//! index aligned to its own size. Allocation splits the smallest
//! sufficient free block downward; deallocation merges a freed block
//! with its buddy for as long as the buddy is free and of equal size.
//! Both directions take O(1) work per rank.
//!
//! The arena is an explicit handle rather than process-wide state, so
//! independent arenas can coexist and hosts decide their own locking.
//! No operation blocks, suspends, or touches the managed region's
//! contents; the arena keeps all of its bookkeeping in a side table
//! that it owns and frees on drop.
//!
//! ```
//! use core::ptr::NonNull;
//!
//! use buddy_arena::{AllocError, BuddyArena};
//!
//! // Four 4 KiB pages, with blocks of up to four pages (rank 3).
//! let layout = BuddyArena::region_layout(4, 4096)?;
//! let region = NonNull::new(unsafe { std::alloc::alloc(layout) }).unwrap();
//!
//! let mut arena = unsafe { BuddyArena::new(region, 4, 4096, 3)? };
//!
//! let block = arena.allocate(2)?; // two contiguous pages
//! assert_eq!(arena.rank_of(block)?, 2);
//! arena.deallocate(block)?;
//!
//! drop(arena);
//! unsafe { std::alloc::dealloc(region.as_ptr(), layout) };
//! # Ok::<(), AllocError>(())
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/buddy_arena/0.1.0")]

extern crate alloc;

#[cfg(feature = "log")]
extern crate log;

// Stub macro when log is disabled - diagnostics become no-ops.
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod base;
pub mod buddy;


use thiserror::Error;

pub use crate::buddy::BuddyArena;

/// The error type for arena operations.
///
/// Every failure is reported by value; no operation aborts, retries
/// internally, or mutates arena state before failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AllocError {
    /// An argument was out of range.
    ///
    /// Raised for a rank outside `[1, max_rank]`, an address outside
    /// the managed region or not page-aligned within it, an address
    /// that does not refer to a live allocation (which covers double
    /// frees), and rejected construction parameters.
    #[error("invalid argument")]
    InvalidArgument,

    /// No free block of sufficient rank is available.
    ///
    /// Retrying with a smaller rank, or releasing memory first, is the
    /// caller's decision.
    #[error("no free block of sufficient rank")]
    OutOfSpace,

    /// The page metadata could not be allocated during construction.
    #[error("page metadata allocation failed")]
    ResourceExhausted,
}

/// A [`Result`] type with [`AllocError`] as the error type.
pub type AllocResult<T = ()> = Result<T, AllocError>;

//! Overlap reconciliation for overlapping text segments
//!
//! Upstream chunkers that slide a window over a document often emit
//! segments that repeat part of their neighbors (the window overlap).
//! This crate re-partitions such a segment sequence into pieces that are
//! unique to one segment and pieces that carry the shared text, with each
//! shared run appearing exactly once in the output.
//!
//! The whole crate is a pure transformation: no I/O, no state, no error
//! conditions. Segment production and piece rendering are left to callers.
//!
//! # Example
//!
//! ```
//! use restitch_core::{reconcile, PieceRole};
//!
//! let pieces = reconcile(&["hello world", "world peace"]);
//!
//! assert_eq!(pieces[0].text, "hello ");
//! assert_eq!(pieces[1].text, "world");
//! assert_eq!(pieces[1].role, PieceRole::Overlap);
//! assert_eq!(pieces[2].text, " peace");
//! ```

#![warn(missing_docs)]

pub mod overlap;
pub mod piece;
pub mod reconcile;

// Re-export key types
pub use overlap::{overlap, scan, Overlap};
pub use piece::{Piece, PieceRole};
pub use reconcile::{merged_text, reconcile};

//! Segment input handling module

pub mod segment_reader;

pub use segment_reader::{SegmentEncoding, SegmentReader};

//! Clip Path - Length ranges over trimmable curve paths.
//!
//! This crate provides:
//!
//! - **Path boundary**: the `TrimmablePath` trait an external curve path
//!   type implements (length, start tangent, sub-paths, trimming)
//! - **Range helpers**: functions that describe a path as `Interval`s of
//!   length and trim a path down to such an interval
//!
//! # Example
//!
//! ```ignore
//! use clip_path::{sub_path_ranges, trim_to_range};
//! use clip_math::Interval;
//!
//! for (i, range) in sub_path_ranges(&path).iter().enumerate() {
//!     println!("sub-path {} covers {:?}", i, range);
//! }
//! let middle = trim_to_range(&path, Interval::new(1.0, 2.5))?;
//! ```

pub mod path;
pub mod ranges;

// Re-export commonly used types
pub use path::TrimmablePath;
pub use ranges::{
    length_range, locate_length, sub_path_ranges, tangent_vector, trim_to_range, PathError,
    PathResult,
};

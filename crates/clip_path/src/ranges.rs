//! Length ranges along a trimmable path.
//!
//! Every range is an [`Interval`] of arc length measured from the start of
//! the whole path, so ranges from different sub-paths can be compared,
//! unified and intersected directly.

use clip_math::Interval;
use glam::DVec2;
use thiserror::Error;

use crate::path::TrimmablePath;

/// Errors that can occur when trimming a path to a range.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PathError {
    #[error("Cannot trim a path to an empty range")]
    EmptyRange,

    #[error("Range [{}, {}] lies outside path of length {length}", .range.min(), .range.max())]
    OutOfRange { range: Interval, length: f64 },
}

/// Result type for path range operations.
pub type PathResult<T> = Result<T, PathError>;

/// The full length range `[0, length]` of `path`.
pub fn length_range<P: TrimmablePath>(path: &P) -> Interval {
    Interval::new(0.0, path.length())
}

/// Length range covered by each sub-path, in order.
///
/// Ranges are contiguous: each one starts where the previous one ends.
pub fn sub_path_ranges<P: TrimmablePath>(path: &P) -> Vec<Interval> {
    let mut start = 0.0;
    let ranges: Vec<Interval> = path
        .sub_paths()
        .iter()
        .map(|sub_path| {
            let range = Interval::new(start, start + sub_path.length());
            start = range.max();
            range
        })
        .collect();

    log::debug!(
        "Computed {} sub-path ranges covering length {:.4}",
        ranges.len(),
        start
    );
    ranges
}

/// Find the sub-path holding the point at length `at`.
///
/// Returns the sub-path index and the offset of `at` within that sub-path,
/// or `None` if `at` is outside the path. Where two sub-paths meet the
/// earlier one wins.
pub fn locate_length<P: TrimmablePath>(path: &P, at: f64) -> Option<(usize, f64)> {
    if !length_range(path).contains(at) {
        return None;
    }

    sub_path_ranges(path)
        .into_iter()
        .enumerate()
        .find(|(_, range)| range.contains(at))
        .map(|(index, range)| (index, at - range.min()))
}

/// Trim `path` down to the part covered by `range`.
///
/// The range must be non-empty and lie within [`length_range`].
pub fn trim_to_range<P: TrimmablePath>(path: &P, range: Interval) -> PathResult<P> {
    if range.is_empty() {
        log::warn!("Refusing to trim path to an empty range");
        return Err(PathError::EmptyRange);
    }

    let length = path.length();
    if !length_range(path).contains_interval(&range) {
        log::warn!(
            "Trim range [{:.4}, {:.4}] exceeds path length {:.4}",
            range.min(),
            range.max(),
            length
        );
        return Err(PathError::OutOfRange { range, length });
    }

    log::debug!(
        "Trimming path of length {:.4} to [{:.4}, {:.4}]",
        length,
        range.min(),
        range.max()
    );
    Ok(path
        .trimmed_from_length(range.min())
        .trimmed_to_length(range.extent()))
}

/// Unit direction of `path` at its start.
pub fn tangent_vector<P: TrimmablePath>(path: &P) -> DVec2 {
    DVec2::from_angle(path.tangent_at_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A path of straight sub-paths along the x axis, one per length.
    #[derive(Debug, Clone, PartialEq)]
    struct Segments(Vec<f64>);

    impl TrimmablePath for Segments {
        fn length(&self) -> f64 {
            self.0.iter().sum()
        }

        fn tangent_at_start(&self) -> f64 {
            0.0
        }

        fn sub_paths(&self) -> Vec<Self> {
            self.0.iter().map(|&len| Segments(vec![len])).collect()
        }

        fn sub_path_index_for_element(&self, element: usize) -> Option<usize> {
            (element < self.0.len()).then_some(element)
        }

        fn trimmed_from_length(&self, trim_length: f64) -> Self {
            let mut skip = trim_length;
            let mut kept = Vec::new();
            for &len in &self.0 {
                if skip >= len {
                    skip -= len;
                } else {
                    kept.push(len - skip);
                    skip = 0.0;
                }
            }
            Segments(kept)
        }

        fn trimmed_to_length(&self, trim_length: f64) -> Self {
            let mut left = trim_length;
            let mut kept = Vec::new();
            for &len in &self.0 {
                if left <= 0.0 {
                    break;
                }
                kept.push(len.min(left));
                left -= len;
            }
            Segments(kept)
        }

        fn append_removing_initial_move_to(&mut self, other: &Self) {
            self.0.extend_from_slice(&other.0);
        }
    }

    #[test]
    fn test_length_range() {
        let path = Segments(vec![1.0, 2.0]);
        assert_eq!(length_range(&path), Interval::new(0.0, 3.0));
        assert_eq!(length_range(&Segments(vec![])), Interval::point(0.0));
    }

    #[test]
    fn test_sub_path_ranges() {
        let path = Segments(vec![1.0, 2.0, 0.5]);
        let ranges = sub_path_ranges(&path);

        assert_eq!(
            ranges,
            vec![
                Interval::new(0.0, 1.0),
                Interval::new(1.0, 3.0),
                Interval::new(3.0, 3.5),
            ]
        );
        assert_eq!(path.count_sub_paths(), 3);
    }

    #[test]
    fn test_locate_length() {
        let path = Segments(vec![1.0, 2.0, 0.5]);

        assert_eq!(locate_length(&path, 0.0), Some((0, 0.0)));
        assert_eq!(locate_length(&path, 1.0), Some((0, 1.0)));
        assert_eq!(locate_length(&path, 2.0), Some((1, 1.0)));
        assert_eq!(locate_length(&path, 3.25), Some((2, 0.25)));
        assert_eq!(locate_length(&path, 3.6), None);
        assert_eq!(locate_length(&path, -0.1), None);
    }

    #[test]
    fn test_trim_to_range() {
        let path = Segments(vec![1.0, 2.0, 0.5]);
        let trimmed = trim_to_range(&path, Interval::new(0.5, 2.0)).unwrap();

        assert_eq!(trimmed, Segments(vec![0.5, 1.0]));
        assert_eq!(trimmed.length(), 1.5);
    }

    #[test]
    fn test_trim_to_range_rejects_empty() {
        let path = Segments(vec![1.0]);
        assert_eq!(
            trim_to_range(&path, Interval::empty()),
            Err(PathError::EmptyRange)
        );
    }

    #[test]
    fn test_trim_to_range_rejects_out_of_range() {
        let path = Segments(vec![1.0]);
        let range = Interval::new(0.5, 1.5);

        let err = trim_to_range(&path, range).unwrap_err();
        assert_eq!(err, PathError::OutOfRange { range, length: 1.0 });
        assert_eq!(
            err.to_string(),
            "Range [0.5, 1.5] lies outside path of length 1"
        );
    }

    #[test]
    fn test_tangent_vector() {
        let path = Segments(vec![1.0]);
        assert_eq!(tangent_vector(&path), DVec2::X);
    }
}

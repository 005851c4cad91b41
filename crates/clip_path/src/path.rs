//! The boundary between `clip` and an external curve path type.
//!
//! Length measurement, tangents, sub-path splitting and trimming belong to
//! the path implementation. `clip` only calls them through this trait.

/// A curve path that can be measured and trimmed along its length.
///
/// Lengths are arc lengths measured from the start of the path. A path is a
/// sequence of sub-paths, each starting with a move-to element.
pub trait TrimmablePath: Sized {
    /// Total length of the path.
    fn length(&self) -> f64;

    /// Direction of the path at its start, as an angle in radians.
    fn tangent_at_start(&self) -> f64;

    /// Split the path into its sub-paths, in drawing order.
    fn sub_paths(&self) -> Vec<Self>;

    fn count_sub_paths(&self) -> usize {
        self.sub_paths().len()
    }

    /// Index of the sub-path holding the element at `element`, if any.
    fn sub_path_index_for_element(&self, element: usize) -> Option<usize>;

    /// The part of the path from `trim_length` to the end.
    fn trimmed_from_length(&self, trim_length: f64) -> Self;

    /// The part of the path from the start to `trim_length`.
    fn trimmed_to_length(&self, trim_length: f64) -> Self;

    /// Append `other`, dropping its leading move-to so it continues this path.
    fn append_removing_initial_move_to(&mut self, other: &Self);
}

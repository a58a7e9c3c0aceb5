use crate::error::SearchError;

/// Compresses a line into `(marker, run length)` pairs of maximal runs, in order
///
/// An empty line has no first marker to start a run from and is rejected.
pub fn streaks<T: Copy + PartialEq>(line: &[T]) -> Result<Vec<(T, usize)>, SearchError> {
    if line.is_empty() {
        return Err(SearchError::EmptyLine);
    }
    Ok(runs(line))
}

/// The maximal runs of a line, which for an empty line are none at all
pub fn runs<T: Copy + PartialEq>(line: &[T]) -> Vec<(T, usize)> {
    let mut runs: Vec<(T, usize)> = Vec::new();
    for &current in line {
        match runs.last_mut() {
            Some((prev, run)) if *prev == current => *run += 1,
            _ => runs.push((current, 1)),
        }
    }
    runs
}

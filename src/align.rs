//! Positional alignment of frame-rate series
//!
//! Variants run for different lengths of time, so their logs differ in
//! sample count. Comparisons use the common prefix: every table is cut to
//! the shortest table's length. No interpolation, no time-based resampling.

use thiserror::Error;

use crate::series::SeriesTable;

/// Errors for series alignment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("no frame-rate series to align")]
    NoSeries,
}

/// Truncate every table to the shortest table's length, keeping the
/// earliest samples of each.
pub fn align(tables: Vec<SeriesTable>) -> Result<Vec<SeriesTable>, AlignmentError> {
    let min_len = tables
        .iter()
        .map(SeriesTable::len)
        .min()
        .ok_or(AlignmentError::NoSeries)?;

    Ok(tables.into_iter().map(|t| t.truncated(min_len)).collect())
}

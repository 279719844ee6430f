use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use crate::{lower_bound_index, upper_bound_index};

/// Seconds in a week
pub const SECONDS_PER_WEEK: f64 = 7.0 * 24.0 * 60.0 * 60.0;

/// A dated series of values, ordered by time
///
/// `Series<T>` holds two parallel sequences: timestamps in seconds since the
/// epoch and the values recorded at those times. Index `i` of one belongs to
/// index `i` of the other. Timestamps are non-decreasing, and the same
/// timestamp may appear more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    /// Timestamps in seconds since the epoch
    timestamps: Vec<T>,
    /// Values, one per timestamp
    values: Vec<T>,
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Series<T> {
    /// Creates a series with no points
    pub const fn empty() -> Self {
        Self {
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T> Series<T>
where
    T: Float + PrimitiveFloat,
{
    /// Creates a new series from parallel timestamps and values
    ///
    /// # Arguments
    ///
    /// * `timestamps` - Timestamps in non-decreasing order
    /// * `values` - Values, one per timestamp
    ///
    /// # Panics
    ///
    /// Panics if the two sequences differ in length. Unsorted timestamps are
    /// only caught in debug builds.
    ///
    /// # Returns
    ///
    /// * `Self` - The series
    pub fn new(timestamps: Vec<T>, values: Vec<T>) -> Self {
        assert_eq!(
            timestamps.len(),
            values.len(),
            "timestamps and values must have the same length"
        );
        debug_assert!(
            timestamps.is_sorted_by_key(|&t| OrderedFloat(t)),
            "timestamps must be sorted"
        );

        Self { timestamps, values }
    }

    /// Creates a new series from `(timestamp, value)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use dated_trend::Series;
    ///
    /// let series = Series::from_pairs([(1.0, 80.2), (2.0, 80.0), (3.0, 79.9)]);
    ///
    /// assert_eq!(series.len(), 3);
    /// assert_eq!(series.values(), &[80.2, 80.0, 79.9]);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let (timestamps, values) = pairs.into_iter().unzip();
        Self::new(timestamps, values)
    }

    /// Returns the timestamps of the series
    pub fn timestamps(&self) -> &[T] {
        &self.timestamps
    }

    /// Returns the values of the series
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of points in the series
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the series has no points
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns an iterator over `(timestamp, value)` pairs in time order
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Returns the earliest timestamp
    pub fn first(&self) -> Option<T> {
        self.timestamps.first().copied()
    }

    /// Returns the latest timestamp
    pub fn last(&self) -> Option<T> {
        self.timestamps.last().copied()
    }

    /// Extracts the half-open range `[lower, upper)` of the series
    ///
    /// A missing bound reaches to the respective end of the series, except
    /// that with both bounds missing there is no usable range at all and the
    /// result is empty. Indices past the end are clamped, and an inverted
    /// range is empty.
    ///
    /// # Arguments
    ///
    /// * `lower` - Inclusive start index, usually from [`lower_bound_index`]
    /// * `upper` - Exclusive end index, usually from [`upper_bound_index`]
    ///
    /// # Returns
    ///
    /// * `Series<T>` - The points inside the range
    ///
    /// # Examples
    ///
    /// ```
    /// use dated_trend::Series;
    ///
    /// let series = Series::from_pairs([(1.0, 10.0), (2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]);
    ///
    /// assert_eq!(series.slice(Some(1), Some(3)).values(), &[20.0, 30.0]);
    /// assert_eq!(series.slice(Some(2), None).values(), &[30.0, 40.0]);
    /// assert_eq!(series.slice(None, Some(1)).values(), &[10.0]);
    /// assert!(series.slice(None, None).is_empty());
    /// ```
    pub fn slice(&self, lower: Option<usize>, upper: Option<usize>) -> Self {
        if lower.is_none() && upper.is_none() {
            return Self::empty();
        }

        let len = self.len();
        let start = lower.unwrap_or(0).min(len);
        let end = upper.unwrap_or(len).min(len);
        if start >= end {
            return Self::empty();
        }

        Self {
            timestamps: self.timestamps[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        }
    }

    /// Extracts the points recorded between `start` and `end`, both inclusive
    ///
    /// A range that ends before the series starts, or starts after it ends,
    /// gives an empty series rather than the open-ended run [`Series::slice`]
    /// would return for a single missing bound.
    ///
    /// # Arguments
    ///
    /// * `start` - Earliest timestamp to keep
    /// * `end` - Latest timestamp to keep
    ///
    /// # Returns
    ///
    /// * `Series<T>` - The points inside the range
    ///
    /// # Examples
    ///
    /// ```
    /// use dated_trend::Series;
    ///
    /// let series = Series::from_pairs([(1.0, 10.0), (2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]);
    ///
    /// assert_eq!(series.between(1.5, 3.0).values(), &[20.0, 30.0]);
    /// assert_eq!(series.between(0.0, 99.0).len(), 4);
    /// assert!(series.between(-5.0, 0.0).is_empty());
    /// assert!(series.between(5.0, 9.0).is_empty());
    /// ```
    pub fn between(&self, start: T, end: T) -> Self {
        let lower = lower_bound_index(&self.timestamps, start);
        let upper = upper_bound_index(&self.timestamps, end);
        match (lower, upper) {
            (Some(lower), Some(upper)) => self.slice(Some(lower), Some(upper)),
            _ => Self::empty(),
        }
    }

    /// Returns the number of weeks between the first and last timestamps
    ///
    /// # Returns
    ///
    /// * `Option<T>` - Fractional weeks spanned, or `None` with fewer than two points
    pub fn weeks_in_range(&self) -> Option<T> {
        if self.len() < 2 {
            return None;
        }

        let span = self.last()? - self.first()?;
        T::from(SECONDS_PER_WEEK).map(|week| span / week)
    }
}

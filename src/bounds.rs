use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

/// Returns the index of the first timestamp that is not earlier than `target`
///
/// The lower bound marks the inclusive start of a date range. An exact match
/// returns its own index, and with duplicate timestamps the first duplicate
/// wins. The search is a binary search, so `timestamps` must be sorted in
/// non-decreasing order.
///
/// # Arguments
///
/// * `timestamps` - Sorted timestamps, in seconds since the epoch
/// * `target` - The start of the requested range
///
/// # Returns
///
/// * `Option<usize>` - The lower bound index, or `None` if every timestamp is
///   earlier than `target` or the slice is empty
///
/// # Examples
///
/// ```
/// use dated_trend::lower_bound_index;
///
/// let timestamps = [10.0, 20.0, 20.0, 30.0];
///
/// assert_eq!(lower_bound_index(&timestamps, 5.0), Some(0));
/// assert_eq!(lower_bound_index(&timestamps, 15.0), Some(1));
/// assert_eq!(lower_bound_index(&timestamps, 20.0), Some(1));
/// assert_eq!(lower_bound_index(&timestamps, 31.0), None);
/// ```
pub fn lower_bound_index<T>(timestamps: &[T], target: T) -> Option<usize>
where
    T: Float + PrimitiveFloat,
{
    let target = OrderedFloat(target);
    let index = timestamps.partition_point(|&t| OrderedFloat(t) < target);

    (index < timestamps.len()).then_some(index)
}

/// Returns the exclusive end index of the timestamps at or before `target`
///
/// The upper bound marks where a date range stops. Timestamps equal to
/// `target` are kept and everything strictly after it is cut off, so the
/// result can be used directly as the end of a half-open range. When `target`
/// is at or past the last timestamp the whole series is kept and the length
/// of the slice is returned.
///
/// # Arguments
///
/// * `timestamps` - Sorted timestamps, in seconds since the epoch
/// * `target` - The end of the requested range
///
/// # Returns
///
/// * `Option<usize>` - The exclusive upper bound index, or `None` if `target`
///   is earlier than the first timestamp or the slice is empty
///
/// # Examples
///
/// ```
/// use dated_trend::upper_bound_index;
///
/// let timestamps = [10.0, 20.0, 30.0];
///
/// assert_eq!(upper_bound_index(&timestamps, 5.0), None);
/// assert_eq!(upper_bound_index(&timestamps, 20.0), Some(2));
/// assert_eq!(upper_bound_index(&timestamps, 25.0), Some(2));
/// assert_eq!(upper_bound_index(&timestamps, 99.0), Some(3));
/// ```
pub fn upper_bound_index<T>(timestamps: &[T], target: T) -> Option<usize>
where
    T: Float + PrimitiveFloat,
{
    let target = OrderedFloat(target);
    let first = timestamps.first().copied().map(OrderedFloat)?;
    if target < first {
        return None;
    }

    Some(timestamps.partition_point(|&t| OrderedFloat(t) <= target))
}

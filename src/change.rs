use num_traits::Float;

/// Returns the percentage change from `prior` to `current`, rounded to a whole percent
///
/// Used to compare a week's training volume against the week before it.
/// Halves round up, so -12.5% reads as -12% and 12.5% as 13%.
///
/// # Arguments
///
/// * `prior` - The earlier value
/// * `current` - The later value
///
/// # Returns
///
/// * `Option<T>` - The rounded change in percent, or `None` if `prior` is
///   zero or the change is not finite
///
/// # Examples
///
/// ```
/// use dated_trend::percentage_change;
///
/// assert_eq!(percentage_change(1000.0, 1150.0), Some(15.0));
/// assert_eq!(percentage_change(1000.0, 875.0), Some(-12.0));
/// assert_eq!(percentage_change(0.0, 875.0), None);
/// ```
pub fn percentage_change<T: Float>(prior: T, current: T) -> Option<T> {
    if prior.is_zero() {
        return None;
    }

    let change = (current / prior - T::one()) * T::from(100)?;
    let half = T::from(0.5)?;
    change.is_finite().then(|| (change + half).floor())
}

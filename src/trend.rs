use num_traits::Float;

use alloc::vec::Vec;

use crate::Kbn;

/// Fewest points a trend line is drawn for
///
/// A line through two points always fits them exactly, so it says nothing
/// about a trend and is not worth plotting.
pub const MIN_TREND_POINTS: usize = 3;

/// A least-squares line `value = slope * timestamp + intercept`
///
/// Produced by [`fit`] and used to draw the trend overlay of a dated chart.
/// The slope is in value units per second when timestamps are epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine<T> {
    /// Change in value per unit of time
    pub slope: T,
    /// Value of the line at timestamp zero
    pub intercept: T,
}

impl<T: Float> TrendLine<T> {
    /// Creates a trend line from its slope and intercept
    pub const fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the line at `timestamp`
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The point to evaluate the line at
    ///
    /// # Returns
    ///
    /// * `T` - `slope * timestamp + intercept`
    #[inline]
    pub fn at(&self, timestamp: T) -> T {
        self.slope * timestamp + self.intercept
    }

    /// Returns the predicted value for each timestamp
    ///
    /// See [`predict`].
    pub fn predict(&self, timestamps: &[T]) -> Vec<T> {
        predict(timestamps, self.slope, self.intercept)
    }

    /// Returns the angle of the line, in radians
    pub fn angle(&self) -> T {
        self.slope.atan()
    }
}

/// Fits an ordinary least-squares line through `(timestamp, value)` pairs
///
/// The result is the solution of the normal equations
///
/// ```text
/// m = (n*Σxy - Σx*Σy) / (n*Σx² - (Σx)²)
/// b = (Σy - m*Σx) / n
/// ```
///
/// evaluated around the means of both axes, with compensated summation.
/// Epoch-second timestamps square to around 1e18, where the raw sums above
/// lose most of their significant digits.
///
/// # Arguments
///
/// * `timestamps` - The x axis, usually seconds since the epoch
/// * `values` - The y axis, one value per timestamp
///
/// # Returns
///
/// * `Option<TrendLine<T>>` - The fitted line, or `None` if there are fewer
///   than two points, the lengths differ, every timestamp is the same, or the
///   fit is not finite
///
/// # Examples
///
/// ```
/// use dated_trend::fit;
/// use assert_approx_eq::assert_approx_eq;
///
/// let trend = fit::<f64>(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();
/// assert_approx_eq!(trend.slope, 2.0);
/// assert_approx_eq!(trend.intercept, 0.0);
///
/// assert!(fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).is_none());
/// ```
pub fn fit<T>(timestamps: &[T], values: &[T]) -> Option<TrendLine<T>>
where
    T: Float + Default,
{
    if timestamps.len() != values.len() || timestamps.len() < 2 {
        return None;
    }

    let n = T::from(timestamps.len())?;
    let points = || timestamps.iter().copied().zip(values.iter().copied());

    let mut sum_x = Kbn::default();
    let mut sum_y = Kbn::default();
    for (x, y) in points() {
        sum_x += x;
        sum_y += y;
    }
    let mean_x = sum_x.total() / n;
    let mean_y = sum_y.total() / n;

    let mut sum_sq_x = Kbn::default();
    let mut sum_prod = Kbn::default();
    for (x, y) in points() {
        let dx = x - mean_x;
        sum_sq_x += dx * dx;
        sum_prod += dx * (y - mean_y);
    }

    let sum_sq_x = sum_sq_x.total();
    if sum_sq_x.is_zero() {
        return None;
    }

    let slope = sum_prod.total() / sum_sq_x;
    let intercept = mean_y - slope * mean_x;

    (slope.is_finite() && intercept.is_finite()).then_some(TrendLine::new(slope, intercept))
}

/// Returns `slope * t + intercept` for each timestamp `t`
///
/// Nothing is predicted for fewer than [`MIN_TREND_POINTS`] timestamps.
///
/// # Arguments
///
/// * `timestamps` - The timestamps to predict values for
/// * `slope` - Slope of the trend line
/// * `intercept` - Intercept of the trend line
///
/// # Returns
///
/// * `Vec<T>` - One prediction per timestamp, or an empty vector
///
/// # Examples
///
/// ```
/// use dated_trend::predict;
///
/// assert_eq!(predict(&[1.0, 2.0, 3.0], 2.0, 1.0), vec![3.0, 5.0, 7.0]);
/// assert!(predict(&[1.0, 2.0], 2.0, 1.0).is_empty());
/// ```
pub fn predict<T: Float>(timestamps: &[T], slope: T, intercept: T) -> Vec<T> {
    if timestamps.len() < MIN_TREND_POINTS {
        return Vec::new();
    }

    let line = TrendLine::new(slope, intercept);
    timestamps.iter().map(|&t| line.at(t)).collect()
}

/// Fits a trend through the series and predicts a value for each timestamp
///
/// # Returns
///
/// * `Vec<T>` - The trend values, or an empty vector when no trend can be fit
///   or there are too few points to draw one
pub fn trend_predictions<T>(timestamps: &[T], values: &[T]) -> Vec<T>
where
    T: Float + Default,
{
    fit(timestamps, values)
        .map(|trend| trend.predict(timestamps))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn fit_exact_line_works() {
        let trend = fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]);
        let trend = trend.unwrap();

        assert_approx_eq!(trend.slope, 2.0);
        assert_approx_eq!(trend.intercept, 0.0);
    }

    #[test]
    fn fit_matches_normal_equations() {
        let xs = [1.0, 2.0, 4.0, 5.0, 8.0];
        let ys = [3.1, 4.9, 9.2, 10.8, 17.5];
        let trend = fit(&xs, &ys).unwrap();

        let n = xs.len() as f64;
        let sx: f64 = xs.iter().sum();
        let sy: f64 = ys.iter().sum();
        let sxx: f64 = xs.iter().map(|x| x * x).sum();
        let sxy: f64 = xs.iter().zip(&ys).map(|(x, y)| x * y).sum();
        let m = (n * sxy - sx * sy) / (n * sxx - sx * sx);
        let b = (sy - m * sx) / n;

        assert_approx_eq!(trend.slope, m, 1e-9);
        assert_approx_eq!(trend.intercept, b, 1e-9);
    }

    #[test]
    fn fit_epoch_seconds_works() {
        let start = 1_640_995_200.0;
        let day = 86_400.0;
        let xs: Vec<f64> = (0..30).map(|i| start + i as f64 * day).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 80.0 - 0.1 * (x - start) / day).collect();

        let trend = fit(&xs, &ys).unwrap();

        assert_approx_eq!(trend.slope * day, -0.1, 1e-9);
        assert_approx_eq!(trend.at(start), 80.0, 1e-6);
        assert_approx_eq!(trend.at(start + 29.0 * day), 77.1, 1e-6);
    }

    #[test]
    fn fit_two_points_works() {
        let trend = fit(&[1.0, 3.0], &[10.0, 20.0]).unwrap();

        assert_approx_eq!(trend.slope, 5.0);
        assert_approx_eq!(trend.intercept, 5.0);
    }

    #[test]
    fn fit_zero_variance_is_none() {
        assert_eq!(fit(&[7.0, 7.0, 7.0, 7.0], &[1.0, 2.0, 3.0, 4.0]), None);
    }

    #[test]
    fn fit_too_few_points_is_none() {
        assert_eq!(fit::<f64>(&[], &[]), None);
        assert_eq!(fit(&[1.0], &[2.0]), None);
    }

    #[test]
    fn fit_mismatched_lengths_is_none() {
        assert_eq!(fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]), None);
    }

    #[test]
    fn fit_flat_values_works() {
        let trend = fit(&[1.0f32, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();

        assert_approx_eq!(trend.slope, 0.0f32);
        assert_approx_eq!(trend.intercept, 5.0f32);
        assert_approx_eq!(trend.angle(), 0.0f32);
    }

    #[test]
    fn predict_works() {
        let predictions = predict(&[0.0, 1.0, 2.0], 2.0, -1.0);
        assert_eq!(predictions, vec![-1.0, 1.0, 3.0]);
    }

    #[test]
    fn predict_two_points_is_empty() {
        assert!(predict(&[0.0, 1.0], 2.0, -1.0).is_empty());
        assert!(TrendLine::new(1.0, 0.0).predict(&[0.0]).is_empty());
    }

    #[test]
    fn trend_predictions_works() {
        let predictions = trend_predictions(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);

        let expected = [1.0, 3.0, 5.0, 7.0];
        assert_eq!(predictions.len(), expected.len());
        for (p, e) in predictions.iter().zip(expected) {
            assert_approx_eq!(*p, e);
        }
    }

    #[test]
    fn trend_predictions_without_trend_is_empty() {
        assert!(trend_predictions(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_empty());
        assert!(trend_predictions(&[1.0, 2.0], &[1.0, 2.0]).is_empty());
    }
}

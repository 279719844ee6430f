use chrono::{DateTime, Utc};
use num_traits::Float;
use ordered_float::PrimitiveFloat;

use alloc::vec::Vec;

use crate::{Series, TimePeriod, TrendLine, fit};

/// Span, in weeks, from which a chart is labelled by week instead of by day
pub const WEEKLY_UNIT_THRESHOLD: f64 = 4.0;

/// The unit used to label the time axis of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// One tick per day
    Day,
    /// One tick per week
    Week,
}

impl TimeUnit {
    /// Picks the axis unit for a range spanning `weeks` weeks
    ///
    /// Ranges shorter than four weeks, or with too few points to have a
    /// span at all, are labelled by day.
    ///
    /// # Examples
    ///
    /// ```
    /// use dated_trend::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::for_weeks(None::<f64>), TimeUnit::Day);
    /// assert_eq!(TimeUnit::for_weeks(Some(3.5)), TimeUnit::Day);
    /// assert_eq!(TimeUnit::for_weeks(Some(4.0)), TimeUnit::Week);
    /// ```
    pub fn for_weeks<T: Float>(weeks: Option<T>) -> Self {
        let threshold = T::from(WEEKLY_UNIT_THRESHOLD);
        match weeks.zip(threshold) {
            Some((weeks, threshold)) if weeks >= threshold => Self::Week,
            _ => Self::Day,
        }
    }
}

/// Everything needed to draw a dated line chart with a trend overlay
///
/// Built from a full series and a requested date range: the series is cut
/// down to the range, a least-squares trend is fit through what remains and
/// the axis unit is chosen from how many weeks the range covers. The view is
/// recomputed from scratch whenever the series or the range changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView<T> {
    /// The points inside the requested range
    series: Series<T>,
    /// Fitted trend through the visible points
    trend: Option<TrendLine<T>>,
    /// Trend value per visible timestamp, empty when no trend is drawn
    predictions: Vec<T>,
    /// Weeks between the first and last visible point
    weeks: Option<T>,
    /// Axis unit
    unit: TimeUnit,
}

impl<T> ChartView<T>
where
    T: Float + PrimitiveFloat + Default,
{
    /// Creates a chart view of the points between `start` and `end`
    ///
    /// # Arguments
    ///
    /// * `series` - The full series, sorted by time
    /// * `start` - Earliest timestamp to show, inclusive
    /// * `end` - Latest timestamp to show, inclusive
    ///
    /// # Returns
    ///
    /// * `Self` - The chart view
    ///
    /// # Examples
    ///
    /// ```
    /// use dated_trend::{ChartView, Series, TimeUnit};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let day: f64 = 86_400.0;
    /// let series = Series::from_pairs([
    ///     (0.0, 90.0),
    ///     (day, 89.0),
    ///     (2.0 * day, 88.0),
    ///     (3.0 * day, 87.0),
    ///     (40.0 * day, 70.0),
    /// ]);
    ///
    /// let view = ChartView::new(&series, 0.0, 3.0 * day);
    ///
    /// assert_eq!(view.series().len(), 4);
    /// assert_eq!(view.unit(), TimeUnit::Day);
    /// for (p, v) in view.predictions().iter().zip(view.series().values()) {
    ///     assert_approx_eq!(p, v, 1e-9);
    /// }
    /// ```
    pub fn new(series: &Series<T>, start: T, end: T) -> Self {
        let series = series.between(start, end);
        let trend = fit(series.timestamps(), series.values());
        let predictions = trend
            .map(|trend| trend.predict(series.timestamps()))
            .unwrap_or_default();
        let weeks = series.weeks_in_range();

        Self {
            series,
            trend,
            predictions,
            weeks,
            unit: TimeUnit::for_weeks(weeks),
        }
    }

    /// Creates a chart view of the points inside a time period
    ///
    /// # Arguments
    ///
    /// * `series` - The full series, sorted by time
    /// * `period` - The period to show
    /// * `now` - The moment fixed periods end at
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The chart view, or `None` if the period cannot be
    ///   expressed in `T`
    pub fn for_period(series: &Series<T>, period: TimePeriod, now: DateTime<Utc>) -> Option<Self> {
        period
            .bounds(now)
            .map(|(start, end)| Self::new(series, start, end))
    }

    /// Returns the points inside the requested range
    pub fn series(&self) -> &Series<T> {
        &self.series
    }

    /// Returns the fitted trend, if one could be fit
    pub fn trend(&self) -> Option<TrendLine<T>> {
        self.trend
    }

    /// Returns the trend value for each visible timestamp
    ///
    /// Empty when there are too few points to draw a trend.
    pub fn predictions(&self) -> &[T] {
        &self.predictions
    }

    /// Returns the number of weeks the visible points span
    pub const fn weeks(&self) -> Option<T> {
        self.weeks
    }

    /// Returns the time axis unit
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns `true` if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;

    use super::*;

    const DAY: f64 = 86_400.0;
    const JAN_1: f64 = 1_640_995_200.0;

    // Bodyweight entries on 2022-01-01, 01-05, 01-10, 02-02 and 02-15
    fn bodyweights() -> Series<f64> {
        Series::from_pairs([
            (JAN_1, 82.0),
            (JAN_1 + 4.0 * DAY, 81.6),
            (JAN_1 + 9.0 * DAY, 81.5),
            (JAN_1 + 32.0 * DAY, 80.2),
            (JAN_1 + 45.0 * DAY, 79.9),
        ])
    }

    #[test]
    fn full_range_works() {
        let view = ChartView::new(&bodyweights(), JAN_1, JAN_1 + 60.0 * DAY);

        assert_eq!(view.series().len(), 5);
        assert_eq!(view.predictions().len(), 5);
        assert_eq!(view.unit(), TimeUnit::Week);
        assert_approx_eq!(view.weeks().unwrap(), 45.0 / 7.0);
        assert!(view.trend().unwrap().slope < 0.0);
    }

    #[test]
    fn short_range_works() {
        let view = ChartView::new(&bodyweights(), JAN_1 + 2.0 * DAY, JAN_1 + 6.0 * DAY);

        assert_eq!(view.series().values(), &[81.6]);
        assert!(view.predictions().is_empty());
        assert_eq!(view.trend(), None);
        assert_eq!(view.weeks(), None);
        assert_eq!(view.unit(), TimeUnit::Day);
    }

    #[test]
    fn two_points_has_trend_without_predictions() {
        let view = ChartView::new(&bodyweights(), JAN_1, JAN_1 + 4.0 * DAY);

        assert_eq!(view.series().len(), 2);
        assert!(view.trend().is_some());
        assert!(view.predictions().is_empty());
    }

    #[test]
    fn range_before_series_is_empty() {
        let view = ChartView::new(&bodyweights(), JAN_1 - 30.0 * DAY, JAN_1 - DAY);

        assert!(view.is_empty());
        assert!(view.predictions().is_empty());
        assert_eq!(view.unit(), TimeUnit::Day);
    }

    #[test]
    fn for_period_works() {
        let now = Utc.with_ymd_and_hms(2022, 2, 20, 0, 0, 0).unwrap();
        let view = ChartView::for_period(&bodyweights(), TimePeriod::OneMonth, now).unwrap();

        assert_eq!(view.series().values(), &[80.2, 79.9]);

        let view = ChartView::for_period(&bodyweights(), TimePeriod::AllTime, now).unwrap();
        assert_eq!(view.series().len(), 5);
    }

    #[test]
    fn for_period_after_series_is_empty() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let view = ChartView::for_period(&bodyweights(), TimePeriod::SixMonths, now).unwrap();

        assert!(view.is_empty());
    }
}

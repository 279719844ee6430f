use chrono::{DateTime, Months, Utc};
use num_traits::Float;

/// A time period a dated chart can be restricted to
///
/// Fixed periods end at "now" and reach back a whole number of calendar
/// months, so "1 Month" from 31 March starts on the last day of February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    /// The last calendar month
    OneMonth,
    /// The last three calendar months
    #[default]
    ThreeMonths,
    /// The last six calendar months
    SixMonths,
    /// Everything since the Unix epoch
    AllTime,
    /// An explicit range
    Custom {
        /// Start of the range, inclusive
        start: DateTime<Utc>,
        /// End of the range, inclusive
        end: DateTime<Utc>,
    },
}

impl TimePeriod {
    /// Returns the display label of the period
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::AllTime => "All Time",
            Self::Custom { .. } => "Custom",
        }
    }

    const fn months(&self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(1),
            Self::ThreeMonths => Some(3),
            Self::SixMonths => Some(6),
            Self::AllTime | Self::Custom { .. } => None,
        }
    }

    /// Resolves the period to a date range
    ///
    /// # Arguments
    ///
    /// * `now` - The moment fixed periods end at
    ///
    /// # Returns
    ///
    /// * `Option<(DateTime<Utc>, DateTime<Utc>)>` - Start and end of the range,
    ///   or `None` if the start is not representable
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use dated_trend::TimePeriod;
    ///
    /// let now = Utc.with_ymd_and_hms(2022, 3, 31, 12, 0, 0).unwrap();
    /// let (start, end) = TimePeriod::OneMonth.range(now).unwrap();
    ///
    /// assert_eq!(start, Utc.with_ymd_and_hms(2022, 2, 28, 12, 0, 0).unwrap());
    /// assert_eq!(end, now);
    /// ```
    pub fn range(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match *self {
            Self::Custom { start, end } => Some((start, end)),
            Self::AllTime => DateTime::from_timestamp(0, 0).map(|epoch| (epoch, now)),
            fixed => {
                let months = Months::new(fixed.months()?);
                now.checked_sub_months(months).map(|start| (start, now))
            }
        }
    }

    /// Resolves the period to a range of epoch seconds
    ///
    /// The result can be passed straight to [`crate::Series::between`].
    ///
    /// # Arguments
    ///
    /// * `now` - The moment fixed periods end at
    ///
    /// # Returns
    ///
    /// * `Option<(T, T)>` - Start and end in seconds since the epoch
    pub fn bounds<T: Float>(&self, now: DateTime<Utc>) -> Option<(T, T)> {
        let (start, end) = self.range(now)?;
        seconds(start).zip(seconds(end))
    }
}

/// Converts a date to fractional seconds since the Unix epoch
///
/// Sub-millisecond precision is dropped.
///
/// # Returns
///
/// * `Option<T>` - The timestamp, or `None` if it does not fit in `T`
pub fn seconds<T: Float>(date: DateTime<Utc>) -> Option<T> {
    let millis = T::from(date.timestamp_millis())?;
    T::from(1000).map(|per_second| millis / per_second)
}

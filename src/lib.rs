#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

#[cfg_attr(test, macro_use)]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod bounds;
pub use bounds::{lower_bound_index, upper_bound_index};

mod series;
pub use series::{SECONDS_PER_WEEK, Series};

mod trend;
pub use trend::{MIN_TREND_POINTS, TrendLine, fit, predict, trend_predictions};

mod period;
pub use period::{TimePeriod, seconds};

mod chart;
pub use chart::{ChartView, TimeUnit, WEEKLY_UNIT_THRESHOLD};

mod change;
pub use change::percentage_change;

mod grouping;
pub use grouping::{Exercise, ExerciseDetails, ExerciseVariant, GroupedExercise, group_by_exercise};

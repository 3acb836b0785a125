//! Points in time that an [`Interval`](crate::Interval) can be built from.

use std::fmt;
use std::ops::Add;

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

/// An absolute point in time.
///
/// Instants are totally ordered, and the distance between two of them is a
/// [`Duration`](Instant::Duration) that can be summed across intervals.
pub trait Instant: Copy + Ord + fmt::Debug {
    type Duration: Copy + Ord + Add<Output = Self::Duration> + fmt::Debug;

    /// The additive identity of [`Instant::Duration`].
    fn zero_duration() -> Self::Duration;

    /// Time elapsed from `earlier` to `self`.
    ///
    /// Only called with `earlier < self`.
    fn duration_since(self, earlier: Self) -> Self::Duration;
}

impl Instant for NaiveDateTime {
    type Duration = TimeDelta;

    fn zero_duration() -> TimeDelta {
        TimeDelta::zero()
    }

    fn duration_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }
}

impl<Tz> Instant for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    type Duration = TimeDelta;

    fn zero_duration() -> TimeDelta {
        TimeDelta::zero()
    }

    fn duration_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }
}

macro_rules! integer_instant {
    ($own:ty, $duration:ty) => {
        impl Instant for $own {
            type Duration = $duration;

            #[inline]
            fn zero_duration() -> $duration {
                0
            }

            #[inline]
            fn duration_since(self, earlier: Self) -> $duration {
                self.abs_diff(earlier)
            }
        }
    };
}
integer_instant!(i32, u32);
integer_instant!(i64, u64);
integer_instant!(u32, u32);
integer_instant!(u64, u64);

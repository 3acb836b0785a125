use std::cmp::{max, min};
use std::fmt;
use std::ops::Range;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, InvalidRangeError, TypeInputError, describe};
use crate::instant::Instant;

/// A single closed time range from `start` to `end`.
///
/// The range is never empty: construction fails unless `end` lies strictly
/// after `start`. Intervals order by `start` and then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawInterval<T>",
    bound(deserialize = "T: Instant + Deserialize<'de>")
)]
pub struct Interval<T> {
    start: T,
    end: T,
}

#[derive(Deserialize)]
pub(crate) struct RawInterval<T> {
    start: T,
    end: T,
}

impl<T: Instant> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = InvalidRangeError;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.end)
    }
}

impl<T: Instant> Interval<T> {
    pub fn new(start: T, end: T) -> Result<Interval<T>, InvalidRangeError> {
        if end <= start {
            return Err(InvalidRangeError::new(&start, &end));
        }
        Ok(Interval { start, end })
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    pub fn duration(&self) -> T::Duration {
        self.end.duration_since(self.start)
    }

    /// Whether `other` lies completely within this interval, endpoints
    /// included.
    pub fn contains(&self, other: &Interval<T>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_instant(&self, instant: T) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether the two ranges share a stretch of time.
    pub(crate) fn overlaps(&self, other: &Interval<T>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Overlapping or meeting exactly at an endpoint.
    pub(crate) fn touches(&self, other: &Interval<T>) -> bool {
        self.overlaps(other) || self.end == other.start || other.end == self.start
    }

    /// Smallest interval covering both.
    pub(crate) fn hull(&self, other: &Interval<T>) -> Interval<T> {
        Interval {
            start: min(self.start, other.start),
            end: max(self.end, other.end),
        }
    }
}

impl<T: Instant + DeserializeOwned> Interval<T> {
    /// Reads an interval from an untyped JSON value.
    ///
    /// Anything but an object with valid `start` and `end` fields is a
    /// [`TypeInputError`].
    pub fn from_value(value: &Value) -> Result<Interval<T>, Error> {
        Ok(Interval::try_from(RawInterval::<T>::from_value(value)?)?)
    }
}

impl<T: DeserializeOwned> RawInterval<T> {
    /// Shape check only; the range itself is not validated.
    pub(crate) fn from_value(value: &Value) -> Result<RawInterval<T>, TypeInputError> {
        if !value.is_object() {
            debug!(found = %describe(value), "rejecting non-interval input");
            return Err(TypeInputError::new("an interval", describe(value)));
        }
        RawInterval::deserialize(value).map_err(|err| {
            debug!(%err, "rejecting malformed interval");
            TypeInputError::new("an interval", err)
        })
    }
}

impl<T: Instant> TryFrom<(T, T)> for Interval<T> {
    type Error = InvalidRangeError;

    fn try_from((start, end): (T, T)) -> Result<Self, Self::Error> {
        Interval::new(start, end)
    }
}

impl<T: Instant> TryFrom<Range<T>> for Interval<T> {
    type Error = InvalidRangeError;

    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Interval::new(range.start, range.end)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

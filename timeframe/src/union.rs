use std::fmt;
use std::slice;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, TypeInputError, describe};
use crate::instant::Instant;
use crate::interval::{Interval, RawInterval};
use crate::query::Query;

/// The union of any number of [`Interval`]s in canonical form.
///
/// Entries are sorted by start, and any two neighbours are separated by a
/// real gap (`previous.end() < next.start()`), so no two entries could be
/// merged further. The form is computed once, when the union is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "RawIntervalUnion<T>",
    bound(deserialize = "T: Instant + Deserialize<'de>")
)]
pub struct IntervalUnion<T> {
    intervals: Vec<Interval<T>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Instant + Deserialize<'de>"))]
struct RawIntervalUnion<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: Instant> From<RawIntervalUnion<T>> for IntervalUnion<T> {
    fn from(raw: RawIntervalUnion<T>) -> Self {
        IntervalUnion::from_intervals(raw.intervals)
    }
}

impl<T> IntervalUnion<T> {
    pub const fn empty() -> IntervalUnion<T> {
        IntervalUnion {
            intervals: Vec::new(),
        }
    }

    /// The canonical entries, sorted and pairwise disjoint.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Number of canonical entries.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn first(&self) -> Option<&Interval<T>> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&Interval<T>> {
        self.intervals.last()
    }
}

impl<T: Instant> IntervalUnion<T> {
    /// Builds the canonical union of `items`.
    ///
    /// Exact duplicates are dropped, the rest is sorted by start (ties by
    /// end) and swept left to right. A candidate that starts at or before the
    /// end of the running entry is folded into it; a candidate after a real
    /// gap closes the running entry and starts the next one.
    pub fn from_intervals<I>(items: I) -> IntervalUnion<T>
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut items: Vec<Interval<T>> = items.into_iter().collect();
        let received = items.len();
        items.sort_unstable();
        // Duplicates are adjacent once sorted.
        items.dedup();
        let unique = items.len();

        let mut intervals = Vec::with_capacity(unique);
        let mut sorted = items.into_iter();
        if let Some(mut current) = sorted.next() {
            for candidate in sorted {
                if current.touches(&candidate) {
                    current = current.hull(&candidate);
                } else {
                    intervals.push(current);
                    current = candidate;
                }
            }
            intervals.push(current);
        }
        trace!(
            received,
            duplicates = received - unique,
            canonical = intervals.len(),
            "normalized interval union"
        );
        IntervalUnion { intervals }
    }

    /// Sum of the durations of the canonical entries.
    ///
    /// Overlapping input is only counted once.
    pub fn total_duration(&self) -> T::Duration {
        self.intervals
            .iter()
            .fold(T::zero_duration(), |total, interval| {
                total + interval.duration()
            })
    }

    /// Smallest interval covering the whole union, gaps included.
    pub fn span(&self) -> Option<Interval<T>> {
        match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => Some(first.hull(last)),
            _ => None,
        }
    }

    /// The only entry that could contain anything ending at `end`.
    fn candidate(&self, end: T) -> Option<&Interval<T>> {
        // Entry ends are strictly increasing. Every entry after the first one
        // reaching `end` starts after it, so it cannot be the candidate.
        let idx = self.intervals.partition_point(|entry| entry.end() < end);
        self.intervals.get(idx)
    }

    pub fn contains_instant(&self, instant: T) -> bool {
        self.candidate(instant)
            .is_some_and(|entry| entry.contains_instant(instant))
    }

    /// Whether `target` is fully covered by the union.
    ///
    /// Accepts a single [`Interval`] or another [`IntervalUnion`]; see
    /// [`Query`]. A union passed by reference is not copied.
    pub fn includes<'a, Q>(&self, target: Q) -> bool
    where
        Q: Into<Query<'a, T>>,
        T: 'a,
    {
        match target.into() {
            Query::Single(interval) => self.includes_interval(&interval),
            Query::Union(union) => self.includes_union(&union),
        }
    }

    /// Whether a single canonical entry contains `target`.
    ///
    /// Entries are separated by gaps, so an interval reaching across two of
    /// them is never included.
    pub fn includes_interval(&self, target: &Interval<T>) -> bool {
        self.candidate(target.end())
            .is_some_and(|entry| entry.contains(target))
    }

    /// Whether every canonical entry of `other` is included.
    pub fn includes_union(&self, other: &IntervalUnion<T>) -> bool {
        other.iter().all(|interval| self.includes_interval(interval))
    }
}

impl<T: Instant + DeserializeOwned> IntervalUnion<T> {
    /// Builds a union from an untyped JSON value.
    ///
    /// The value must be an array of interval objects. The shape of every
    /// element is checked before any range is validated, so a non-interval
    /// element anywhere is a [`TypeInputError`] even when an earlier element
    /// holds an inverted range.
    pub fn from_value(value: &Value) -> Result<IntervalUnion<T>, Error> {
        let Some(items) = value.as_array() else {
            debug!(found = %describe(value), "rejecting non-sequence union input");
            return Err(TypeInputError::new("a sequence of intervals", describe(value)).into());
        };
        let raw = items
            .iter()
            .enumerate()
            .map(|(index, item)| RawInterval::from_value(item).map_err(|err| err.at(index)))
            .collect::<Result<Vec<RawInterval<T>>, _>>()?;
        let intervals = raw
            .into_iter()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IntervalUnion::from_intervals(intervals))
    }

    /// [`IntervalUnion::includes`] for a target read from untyped JSON.
    ///
    /// See [`Query::from_value`] for the accepted shapes.
    pub fn includes_value(&self, target: &Value) -> Result<bool, Error>
    where
        T: 'static,
    {
        Ok(self.includes(Query::from_value(target)?))
    }
}

impl<T> Default for IntervalUnion<T> {
    fn default() -> Self {
        IntervalUnion::empty()
    }
}

impl<T: Instant> From<Interval<T>> for IntervalUnion<T> {
    fn from(interval: Interval<T>) -> Self {
        IntervalUnion {
            intervals: vec![interval],
        }
    }
}

impl<T: Instant> From<Vec<Interval<T>>> for IntervalUnion<T> {
    fn from(items: Vec<Interval<T>>) -> Self {
        IntervalUnion::from_intervals(items)
    }
}

impl<T: Instant> FromIterator<Interval<T>> for IntervalUnion<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        IntervalUnion::from_intervals(iter)
    }
}

impl<'a, T> IntoIterator for &'a IntervalUnion<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T> IntoIterator for IntervalUnion<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for IntervalUnion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", interval)?;
        }
        f.write_str("}")
    }
}

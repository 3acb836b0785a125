//! Strategies for property testing code built on intervals.

use std::ops::Range;

use ::proptest::collection::vec;
use ::proptest::prelude::*;
use chrono::{DateTime, NaiveDateTime, TimeDelta};

use crate::{Interval, IntervalUnion};

/// Intervals starting in `starts` and lasting between 1 and `max_len`.
pub fn arb_interval(starts: Range<i64>, max_len: i64) -> impl Strategy<Value = Interval<i64>> {
    (starts, 1..=max_len.max(1))
        .prop_filter_map("end after start", |(start, len)| {
            Interval::new(start, start.checked_add(len)?).ok()
        })
}

pub fn arb_interval_union(
    starts: Range<i64>,
    max_len: i64,
    max_items: usize,
) -> impl Strategy<Value = IntervalUnion<i64>> {
    vec(arb_interval(starts, max_len), 0..=max_items).prop_map(IntervalUnion::from_intervals)
}

/// Whole-second date times between 2020-09-13 and 2023-11-14.
pub fn arb_naive_date_time() -> impl Strategy<Value = NaiveDateTime> {
    (1_600_000_000i64..1_700_000_000).prop_filter_map("valid timestamp", |secs| {
        DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
    })
}

/// Intervals of up to a week.
pub fn arb_naive_interval() -> impl Strategy<Value = Interval<NaiveDateTime>> {
    (arb_naive_date_time(), 1i64..=7 * 24 * 3600).prop_filter_map(
        "end after start",
        |(start, secs)| {
            let end = start.checked_add_signed(TimeDelta::seconds(secs))?;
            Interval::new(start, end).ok()
        },
    )
}

pub fn arb_naive_interval_union(
    max_items: usize,
) -> impl Strategy<Value = IntervalUnion<NaiveDateTime>> {
    vec(arb_naive_interval(), 0..=max_items).prop_map(IntervalUnion::from_intervals)
}

impl Arbitrary for Interval<i64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Interval<i64>>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        arb_interval(-10_000..10_000, 1_000).boxed()
    }
}

impl Arbitrary for IntervalUnion<i64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<IntervalUnion<i64>>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        arb_interval_union(-10_000..10_000, 1_000, 32).boxed()
    }
}

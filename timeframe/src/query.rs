use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, TypeInputError, describe};
use crate::instant::Instant;
use crate::interval::Interval;
use crate::union::IntervalUnion;

/// Target of a containment query.
///
/// Only a single interval or a whole union can be asked about. A bare list
/// of intervals has to be turned into an [`IntervalUnion`] first. A union
/// passed by reference is borrowed, not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<'a, T: Clone> {
    Single(Interval<T>),
    Union(Cow<'a, IntervalUnion<T>>),
}

impl<T: Instant + DeserializeOwned> Query<'static, T> {
    /// Reads a query target from untyped JSON.
    ///
    /// An object with an `intervals` field is read as a union, any other
    /// object as an interval. Arrays and scalars are rejected.
    pub fn from_value(value: &Value) -> Result<Query<'static, T>, Error> {
        match value {
            Value::Object(map) => match map.get("intervals") {
                Some(intervals) => Ok(IntervalUnion::from_value(intervals)?.into()),
                None => Ok(Query::Single(Interval::from_value(value)?)),
            },
            other => {
                debug!(found = %describe(other), "rejecting query target");
                Err(TypeInputError::new("an interval or interval union", describe(other)).into())
            }
        }
    }
}

impl<T: Clone> From<Interval<T>> for Query<'_, T> {
    fn from(interval: Interval<T>) -> Self {
        Query::Single(interval)
    }
}

impl<T: Copy> From<&Interval<T>> for Query<'_, T> {
    fn from(interval: &Interval<T>) -> Self {
        Query::Single(*interval)
    }
}

impl<T: Clone> From<IntervalUnion<T>> for Query<'_, T> {
    fn from(union: IntervalUnion<T>) -> Self {
        Query::Union(Cow::Owned(union))
    }
}

impl<'a, T: Clone> From<&'a IntervalUnion<T>> for Query<'a, T> {
    fn from(union: &'a IntervalUnion<T>) -> Self {
        Query::Union(Cow::Borrowed(union))
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn iv(start: i64, end: i64) -> Interval<i64> {
        Interval::new(start, end).unwrap()
    }

    #[rstest]
    #[case::interval(json!({"start": 1, "end": 2}), Query::Single(iv(1, 2)))]
    #[case::union(
        json!({"intervals": [{"start": 3, "end": 4}, {"start": 1, "end": 3}]}),
        Query::from(IntervalUnion::from(iv(1, 4)))
    )]
    #[case::empty_union(json!({"intervals": []}), Query::from(IntervalUnion::empty()))]
    fn from_value_ok(#[case] value: Value, #[case] expected: Query<'static, i64>) {
        assert_eq!(Query::from_value(&value), Ok(expected));
    }

    #[rstest]
    #[case::integer(json!(1), "number 1")]
    #[case::float(json!(1.0), "number 1.0")]
    #[case::string(json!("dummy"), "string \"dummy\"")]
    #[case::empty_list(json!([]), "array of 0 elements")]
    #[case::mixed_list(json!([1, 1.0, "dummy"]), "array of 3 elements")]
    #[case::interval_list(json!([{"start": 1, "end": 2}]), "array of 1 elements")]
    fn from_value_rejects(#[case] value: Value, #[case] found: &str) {
        assert_eq!(
            Query::<i64>::from_value(&value),
            Err(TypeInputError::new("an interval or interval union", found).into())
        );
    }

    #[test]
    fn from_value_malformed_union() {
        let err = Query::<i64>::from_value(&json!({"intervals": 5})).expect_err("not a list");
        assert!(matches!(err, Error::TypeInput(_)), "{:?}", err);
        let err = Query::<i64>::from_value(&json!({"intervals": [{"start": 2, "end": 1}]}))
            .expect_err("inverted entry");
        assert!(matches!(err, Error::InvalidRange(_)), "{:?}", err);
        let err = Query::<i64>::from_value(&json!({"start": 2, "end": 2})).expect_err("empty");
        assert!(matches!(err, Error::InvalidRange(_)), "{:?}", err);
    }

    #[test]
    fn conversions() {
        let tf = iv(1, 2);
        assert_eq!(Query::from(&tf), Query::Single(tf));
        let u = IntervalUnion::from(tf);
        assert!(matches!(Query::from(&u), Query::Union(Cow::Borrowed(b)) if std::ptr::eq(b, &u)));
        assert!(matches!(Query::from(u.clone()), Query::Union(Cow::Owned(_))));
        assert_eq!(Query::from(&u), Query::from(u.clone()));
    }
}

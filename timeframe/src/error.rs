use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// An interval whose end does not lie strictly after its start.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("invalid range: end {end} is not after start {start}")]
pub struct InvalidRangeError {
    pub start: String,
    pub end: String,
}

impl InvalidRangeError {
    pub fn new<T: fmt::Debug>(start: &T, end: &T) -> InvalidRangeError {
        InvalidRangeError {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }
}

/// A value at a dynamically typed boundary that is not the shape an
/// operation accepts.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("expected {expected}, found {found}{}", .index.map(|i| format!(" at index {i}")).unwrap_or_default())]
pub struct TypeInputError {
    pub expected: &'static str,
    pub found: String,
    pub index: Option<usize>,
}

impl TypeInputError {
    pub fn new<F: ToString>(expected: &'static str, found: F) -> TypeInputError {
        TypeInputError {
            expected,
            found: found.to_string(),
            index: None,
        }
    }

    pub(crate) fn at(self, index: usize) -> TypeInputError {
        TypeInputError {
            index: Some(index),
            ..self
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
    #[error(transparent)]
    TypeInput(#[from] TypeInputError),
}

/// Short human readable description of a JSON value's shape.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(a) => format!("array of {} elements", a.len()),
        Value::Object(_) => "object".into(),
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::null(json!(null), "null")]
    #[case::boolean(json!(true), "boolean true")]
    #[case::integer(json!(1), "number 1")]
    #[case::float(json!(1.0), "number 1.0")]
    #[case::string(json!("dummy"), "string \"dummy\"")]
    #[case::array(json!([1, 1.0, "dummy"]), "array of 3 elements")]
    #[case::object(json!({"start": 1}), "object")]
    fn describe_value(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(describe(&value), expected);
    }

    #[rstest]
    #[case::plain(TypeInputError::new("an interval", "number 1"), "expected an interval, found number 1")]
    #[case::indexed(
        TypeInputError::new("an interval", "string \"dummy\"").at(2),
        "expected an interval, found string \"dummy\" at index 2"
    )]
    fn type_input_display(#[case] err: TypeInputError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn invalid_range_display() {
        let err = InvalidRangeError::new(&14, &12);
        assert_eq!(err.to_string(), "invalid range: end 12 is not after start 14");
        assert_eq!(Error::from(err.clone()).to_string(), err.to_string());
    }
}

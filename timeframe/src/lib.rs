// SPDX-FileCopyrightText: 2024 griff
//
// SPDX-License-Identifier: EUPL-1.2 or MIT
//#![deny(unused_crate_dependencies)]

//! Closed time ranges and the canonical union of many of them.
//!
//! An [`IntervalUnion`] is normalized once, when it is built: duplicates are
//! dropped, entries are sorted and every overlapping or touching pair is
//! merged. All queries run against that sorted, disjoint form.
//!
//! ```
//! use chrono::NaiveDate;
//! use timeframe::{Interval, IntervalUnion};
//!
//! let at = |h, m| NaiveDate::from_ymd_opt(2021, 1, 17).unwrap().and_hms_opt(h, m, 0).unwrap();
//! let union: IntervalUnion<_> = [
//!     Interval::new(at(10, 0), at(11, 0)).unwrap(),
//!     Interval::new(at(10, 30), at(13, 0)).unwrap(),
//!     Interval::new(at(18, 0), at(20, 0)).unwrap(),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(union.len(), 2);
//! assert!(union.includes(Interval::new(at(12, 0), at(12, 30)).unwrap()));
//! assert!(!union.includes(Interval::new(at(12, 0), at(18, 30)).unwrap()));
//! ```

mod error;
pub mod instant;
pub mod interval;
pub mod query;
pub mod union;

pub use error::{Error, InvalidRangeError, TypeInputError};
pub use instant::Instant;
pub use interval::Interval;
pub use query::Query;
pub use union::IntervalUnion;

#[cfg(any(test, feature = "test"))]
pub mod proptest;

//! Per-field fragment builders.
//!
//! Every builder takes the raw optional criteria value and returns `None` when
//! the value should not filter anything. Strings are trimmed first; a blank
//! string is treated exactly like a missing one.

use super::predicate::{Clause, Field, Value};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive substring match. Works the same for columns on a related
/// table.
pub fn contains_ignore_case<F: Field>(field: F, value: Option<&str>) -> Option<Clause<F>> {
    non_blank(value).map(|v| Clause::Contains {
        field,
        needle: v.to_lowercase(),
    })
}

/// Exact match against the trimmed value, case preserved.
pub fn exact<F: Field>(field: F, value: Option<&str>) -> Option<Clause<F>> {
    non_blank(value).map(|v| Clause::Equals {
        field,
        value: Value::Text(v.to_string()),
    })
}

pub fn equals_ignore_case<F: Field>(field: F, value: Option<&str>) -> Option<Clause<F>> {
    non_blank(value).map(|v| Clause::EqualsIgnoreCase {
        field,
        value: v.to_lowercase(),
    })
}

/// Inclusive range from two independent bounds.
pub fn range<F, T>(field: F, min: Option<T>, max: Option<T>) -> Option<Clause<F>>
where
    F: Field,
    T: Into<Value>,
{
    match (min, max) {
        (None, None) => None,
        (Some(min), None) => Some(Clause::AtLeast {
            field,
            bound: min.into(),
        }),
        (None, Some(max)) => Some(Clause::AtMost {
            field,
            bound: max.into(),
        }),
        (Some(min), Some(max)) => Some(Clause::Between {
            field,
            min: min.into(),
            max: max.into(),
        }),
    }
}

pub fn at_least<F, T>(field: F, threshold: Option<T>) -> Option<Clause<F>>
where
    F: Field,
    T: Into<Value>,
{
    threshold.map(|t| Clause::AtLeast {
        field,
        bound: t.into(),
    })
}

/// `Some(false)` filters for false; only `None` leaves the column unfiltered.
pub fn flag<F: Field>(field: F, value: Option<bool>) -> Option<Clause<F>> {
    value.map(|v| Clause::Equals {
        field,
        value: Value::Bool(v),
    })
}

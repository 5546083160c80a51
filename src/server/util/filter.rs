//! Predicates shared by the list filters.
//!
//! An unset filter (`None`) never constrains the result. A set filter of
//! `Some("")` is still a constraint; for substring filters it matches every
//! value.

/// Case-insensitive substring match.
pub fn contains_ignore_case(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Exact match.
pub fn equals<T: PartialEq + ?Sized>(value: &T, filter: Option<&T>) -> bool {
    match filter {
        Some(expected) => value == expected,
        None => true,
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Array helpers: order-insensitive comparison, de-duplication, grouping, and sorting.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::utils::coerce::{Truthy, to_js_string};

/// Maximum nesting flattened by [`compare_json_arrays`].
const FLATTEN_DEPTH: usize = 10;

/// Order-insensitive equality: both slices hold the same elements the same number of times.
pub fn compare_arrays<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left = a.to_vec();
    let mut right = b.to_vec();
    left.sort();
    right.sort();
    left == right
}

/// Order-insensitive equality for loosely typed JSON arrays.
///
/// Nested arrays are flattened (up to ten levels) and elements are ordered by
/// their JavaScript string form before comparing. Elements that share a string
/// form but differ in type (`1` and `"1"`) keep their relative order, so such
/// mixes only compare equal when they line up.
pub fn compare_json_arrays(a: &[Value], b: &[Value]) -> bool {
    let left = sorted_by_string_form(flatten(a, FLATTEN_DEPTH));
    let right = sorted_by_string_form(flatten(b, FLATTEN_DEPTH));
    left == right
}

/// Drop repeated elements, keeping the first occurrence in first-seen order.
pub fn remove_duplicates_from_array<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// [`remove_duplicates_from_array`] for JSON values, which are compared structurally.
pub fn remove_duplicate_values(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Look up `key` on a JSON object; anything else has no keys.
pub fn get_value_by_key<'a>(object: &'a Value, key: &str) -> Option<&'a Value> {
    object.as_object().and_then(|map| map.get(key))
}

/// Group array elements by the string form of `element[key]`.
///
/// - Falsy `items` (`null`, `false`, `0`, `""`) yields `Ok(None)`.
/// - An empty `key` returns `items` unchanged.
/// - Otherwise returns an object whose values list the matching elements in
///   input order. Elements without the key group under `"undefined"`.
/// - Keys that look like array indices come first in numeric order; the others
///   follow in order of first appearance.
///
/// # Errors
///
/// Fails when `items` is truthy but not an array, or when an element is `null`.
pub fn group_by(items: &Value, key: &str) -> Result<Option<Value>> {
    if !items.is_truthy() {
        return Ok(None);
    }
    if key.is_empty() {
        return Ok(Some(items.clone()));
    }
    let Value::Array(elements) = items else {
        return Err(Error::NotAnArray);
    };

    let mut groups: Vec<(String, Vec<Value>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for element in elements {
        if element.is_null() {
            return Err(Error::NullElement {
                key: key.to_string(),
            });
        }
        let group = element
            .get(key)
            .map(to_js_string)
            .unwrap_or_else(|| "undefined".to_string());
        let slot = *slots.entry(group.clone()).or_insert_with(|| {
            groups.push((group, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(element.clone());
    }

    // Object key order: array-index keys ascending, then the rest as first seen.
    groups.sort_by_key(|(group, _)| match array_index(group) {
        Some(index) => (false, index),
        None => (true, 0),
    });

    let groups: Map<String, Value> = groups
        .into_iter()
        .map(|(group, members)| (group, Value::Array(members)))
        .collect();
    Ok(Some(Value::Object(groups)))
}

/// Canonical decimal array index (`0`, `7`, `42`; not `07` or `-1`).
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index != u32::MAX)
}

/// Sort order accepted by the sorting helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(Error::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparable view of a value used by the sorters.
///
/// Only like kinds are ordered against each other; any other pairing compares
/// as equal and keeps its input order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
    /// Milliseconds since the Unix epoch.
    Date(i64),
    Other,
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => locale_compare(a, b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Values the sorters know how to order, directly or through a named field.
pub trait Sortable {
    /// Key of the value itself.
    fn sort_key(&self) -> SortKey<'_>;

    /// Key of the field named `key`; values without fields sort as [`SortKey::Other`].
    fn field_sort_key(&self, _key: &str) -> SortKey<'_> {
        SortKey::Other
    }
}

impl Sortable for Value {
    fn sort_key(&self) -> SortKey<'_> {
        match self {
            Value::String(s) => SortKey::Text(s),
            Value::Number(n) => n.as_f64().map_or(SortKey::Other, SortKey::Number),
            _ => SortKey::Other,
        }
    }

    fn field_sort_key(&self, key: &str) -> SortKey<'_> {
        get_value_by_key(self, key).map_or(SortKey::Other, Sortable::sort_key)
    }
}

impl Sortable for str {
    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Text(self)
    }
}

impl Sortable for String {
    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Text(self)
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_key(&self) -> SortKey<'_> {
        (**self).sort_key()
    }

    fn field_sort_key(&self, key: &str) -> SortKey<'_> {
        (**self).field_sort_key(key)
    }
}

macro_rules! impl_sortable_for_number {
    ($($ty:ty),*) => {
        $(impl Sortable for $ty {
            fn sort_key(&self) -> SortKey<'_> {
                SortKey::Number(*self as f64)
            }
        })*
    };
}

impl_sortable_for_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<Tz: TimeZone> Sortable for DateTime<Tz> {
    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Date(self.timestamp_millis())
    }
}

impl Sortable for NaiveDateTime {
    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Date(self.and_utc().timestamp_millis())
    }
}

impl Sortable for NaiveDate {
    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Date(self.and_time(NaiveTime::default()).and_utc().timestamp_millis())
    }
}

/// Sort `items` ascending or descending, optionally by an object field.
///
/// - Empty input yields `None`.
/// - An unknown `direction` is logged and the input is handed back untouched
///   as [`Cow::Borrowed`].
/// - Otherwise a sorted copy is returned as [`Cow::Owned`].
///
/// Text compares with a locale-style collation, numbers numerically, and dates
/// by timestamp; mixed kinds compare as equal. An empty `key` compares the
/// elements themselves, otherwise `element[key]`. The sort is stable.
pub fn sort_array_by_direction<'a, T>(
    items: &'a [T],
    direction: &str,
    key: &str,
) -> Option<Cow<'a, [T]>>
where
    T: Sortable + Clone,
{
    if items.is_empty() {
        return None;
    }

    let direction = match direction.parse::<SortDirection>() {
        Ok(direction) => direction,
        Err(err) => {
            tracing::error!(error = %err, "invalid sorting direction, returning input unsorted");
            return Some(Cow::Borrowed(items));
        }
    };

    let order = stable_order(items.len(), |a, b| {
        let (left, right) = if key.is_empty() {
            (items[a].sort_key(), items[b].sort_key())
        } else {
            (items[a].field_sort_key(key), items[b].field_sort_key(key))
        };
        direction.apply(left.compare(&right))
    });

    Some(Cow::Owned(order.into_iter().map(|i| items[i].clone()).collect()))
}

/// Numeric-only variant of [`sort_array_by_direction`] taking `"asc"` or `"desc"`.
pub fn sort_array_by_mode<'a>(items: &'a [f64], mode: &str) -> Option<Cow<'a, [f64]>> {
    sort_array_by_direction(items, mode, "")
}

fn flatten(items: &[Value], depth: usize) -> Vec<&Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(nested) if depth > 0 => out.extend(flatten(nested, depth - 1)),
            other => out.push(other),
        }
    }
    out
}

fn sorted_by_string_form(items: Vec<&Value>) -> Vec<&Value> {
    let mut keyed: Vec<(String, &Value)> = items
        .into_iter()
        .map(|item| (to_js_string(item), item))
        .collect();
    keyed.sort_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Approximate the default collation: letters compare by their ASCII
/// transliteration ignoring case, then accented after plain, then lowercase
/// before uppercase, then code point order.
fn locale_compare(a: &str, b: &str) -> Ordering {
    let base = |s: &str| deunicode::deunicode(s).to_lowercase();
    base(a)
        .cmp(&base(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            let case = |s: &str| -> Vec<bool> { s.chars().map(char::is_uppercase).collect() };
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}

/// Indices of `0..len` in stable sorted order.
///
/// Bottom-up merge sort that tolerates comparators which are not total orders,
/// such as the mixed-kind "equal" rule above.
fn stable_order<F>(len: usize, cmp: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut buffer = vec![0; len];
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);

            while i < mid && j < end {
                if cmp(order[j], order[i]) == Ordering::Less {
                    buffer[k] = order[j];
                    j += 1;
                } else {
                    buffer[k] = order[i];
                    i += 1;
                }
                k += 1;
            }
            buffer[k..k + (mid - i)].copy_from_slice(&order[i..mid]);
            k += mid - i;
            buffer[k..k + (end - j)].copy_from_slice(&order[j..end]);

            start = end;
        }
        std::mem::swap(&mut order, &mut buffer);
        width *= 2;
    }

    order
}

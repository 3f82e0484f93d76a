//! Recursive deep merge over value trees.
//!
//! The rule at a colliding key:
//!
//! - mapping (or container) with mapping (or container): merged key by key
//! - list with list: the right list is appended to the left one
//! - anything else: the right value replaces the left one
//!
//! Positional keys (`"0"`, `"1"`, ...) never collide: a right-hand position
//! already taken on the left is appended under the next free position.
//!
//! Keys only present on one side are kept in place, right-hand newcomers are
//! appended in their own order.

use crate::container::DataContainer;
use crate::value::{Store, Value};

/// Merges `right` into `left` and returns the combined tree.
pub fn merge_recursive(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::List(mut items), Value::List(more)) => {
            items.extend(more);
            Value::List(items)
        }
        (Value::Map(map), Value::Map(other)) => Value::Map(merge_entries(map, other)),
        (Value::Map(map), Value::Eater(other)) => {
            Value::Map(merge_entries(map, other.into_store()))
        }
        (Value::Eater(mut eater), right @ (Value::Map(_) | Value::Eater(_))) => {
            let entries = right.into_entries().unwrap_or_default();
            let normalized: Vec<_> = entries
                .into_iter()
                .map(|(key, value)| (eater.format(&key), value))
                .collect();
            let merged = merge_entries(std::mem::take(eater.store_mut()), normalized);
            *eater.store_mut() = merged;
            Value::Eater(eater)
        }
        (_, right) => right,
    }
}

/// A decimal position such as `"0"` or `"12"`, without sign or leading zeros.
fn position(key: &str) -> Option<u64> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn next_position(store: &Store) -> u64 {
    store
        .keys()
        .filter_map(|key| position(key))
        .max()
        .map_or(0, |last| last + 1)
}

/// Merges a stream of entries into `left`, key by key.
pub fn merge_entries<I>(mut left: Store, right: I) -> Store
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut next = next_position(&left);
    for (key, value) in right {
        if position(&key).is_some() && left.contains_key(&key) {
            left.insert(next.to_string(), value);
            next += 1;
            continue;
        }
        match left.get_mut(&key) {
            Some(slot) => {
                let existing = std::mem::take(slot);
                *slot = merge_recursive(existing, value);
            }
            None => {
                if let Some(taken) = position(&key) {
                    next = next.max(taken + 1);
                }
                left.insert(key, value);
            }
        }
    }
    left
}

use crate::dispatch::{self, Accessor, Dispatch};
use crate::eater::Eater;
use crate::error::EaterError;
use crate::json;
use crate::key;
use crate::merge;
use crate::value::{Store, Value};
use log::{debug, trace, warn};

/// The capability set of a keyed data bag.
///
/// Implementors only expose their backing [`Store`]; every other operation is
/// provided. Every key that reaches the store goes through [`format`] first,
/// so `fooBar`, `FooBar` and `foo_bar` address the same slot.
///
/// Domain types can build on the bag by wrapping a store and implementing
/// this trait, optionally overriding [`format`] to change the key policy.
///
/// # Examples
///
/// ```
/// use eater::{DataContainer, Store, Value};
///
/// #[derive(Default)]
/// struct Customer {
///     store: Store,
/// }
///
/// impl DataContainer for Customer {
///     fn store(&self) -> &Store {
///         &self.store
///     }
///
///     fn store_mut(&mut self) -> &mut Store {
///         &mut self.store
///     }
/// }
///
/// let mut customer = Customer::default();
/// customer.set_data("firstName", "Ada").set_data("lastName", "Lovelace");
///
/// assert_eq!(customer.get_data("first_name"), Some(&Value::from("Ada")));
/// assert!(customer.has_data("LastName"));
/// assert_eq!(customer.len(), 2);
/// ```
///
/// [`format`]: DataContainer::format
pub trait DataContainer {
    /// The normalized entries, in insertion order.
    fn store(&self) -> &Store;

    fn store_mut(&mut self) -> &mut Store;

    /// Normalizes a key before it touches the store.
    ///
    /// Defaults to [`key::format`]. Overrides must stay idempotent.
    fn format(&self, name: &str) -> String {
        key::format(name)
    }

    /// Adds every entry of `data` through [`set_data`](DataContainer::set_data).
    ///
    /// `data` may be a mapping, a list (keyed by position) or a container.
    /// Anything else, including `Value::Null`, leaves the container untouched.
    ///
    /// With `recursive`, plain mapping values are wrapped into nested
    /// [`Eater`]s, all the way down. Lists, scalars and values that already
    /// are containers are stored as they are.
    fn add_data<T: Into<Value>>(&mut self, data: T, recursive: bool) -> &mut Self {
        let Some(entries) = data.into().into_entries() else {
            trace!("add_data ignored a value that is not a collection");
            return self;
        };
        trace!("adding {} entries (recursive: {})", entries.len(), recursive);
        for (name, value) in entries {
            let value = match value {
                Value::Map(map) if recursive => Value::Eater(Eater::from_data(map, true)),
                other => other,
            };
            self.set_data(&name, value);
        }
        self
    }

    /// Stores `value` under the normalized `name`, replacing whatever was
    /// there before.
    fn set_data<T: Into<Value>>(&mut self, name: &str, value: T) -> &mut Self {
        let key = self.format(name);
        self.store_mut().insert(key, value.into());
        self
    }

    /// Replaces the whole store with the entries of `data`.
    ///
    /// The previous entries are discarded, not merged. `Value::Null` or an
    /// empty collection leaves the container empty.
    fn replace_data<T: Into<Value>>(&mut self, data: T, recursive: bool) -> &mut Self {
        trace!("replacing {} entries", self.len());
        self.store_mut().clear();
        self.add_data(data, recursive)
    }

    /// All entries, in insertion order.
    fn data(&self) -> &Store {
        self.store()
    }

    /// The value under the normalized `name`, or `None` on a miss.
    fn get_data(&self, name: &str) -> Option<&Value> {
        self.store().get(&self.format(name))
    }

    fn get_data_mut(&mut self, name: &str) -> Option<&mut Value> {
        let key = self.format(name);
        self.store_mut().get_mut(&key)
    }

    /// Drills into the value under `name` and returns its `field`.
    ///
    /// Missing keys, missing fields and stored values that have no fields
    /// (scalars) are all soft misses.
    fn get_field(&self, name: &str, field: &str) -> Option<&Value> {
        self.get_data(name)?.get(field)
    }

    fn has_data(&self, name: &str) -> bool {
        self.store().contains_key(&self.format(name))
    }

    /// True when the container holds at least one entry.
    fn has_any_data(&self) -> bool {
        !self.store().is_empty()
    }

    /// Removes the normalized `name`; a missing key is not an error.
    fn unset_data(&mut self, name: &str) -> &mut Self {
        let key = self.format(name);
        self.store_mut().shift_remove(&key);
        self
    }

    fn clear_data(&mut self) -> &mut Self {
        self.store_mut().clear();
        self
    }

    /// Indexed existence check.
    fn contains_key(&self, key: &str) -> bool {
        self.store().contains_key(&self.format(key))
    }

    /// Indexed read.
    fn get(&self, key: &str) -> Option<&Value> {
        self.get_data(key)
    }

    /// Indexed write.
    fn set<T: Into<Value>>(&mut self, key: &str, value: T) {
        self.set_data(key, value);
    }

    /// Indexed removal, returning the value that was stored.
    fn remove(&mut self, key: &str) -> Option<Value> {
        let key = self.format(key);
        self.store_mut().shift_remove(&key)
    }

    /// Deep-merges a mapping, list or container into this container.
    ///
    /// Incoming top-level keys are normalized first, then combined with the
    /// current entries by [`merge::merge_entries`]: nested mappings merge by
    /// key, lists are concatenated and other values are overwritten. The
    /// result replaces the store.
    ///
    /// # Errors
    ///
    /// Returns `EaterError::InvalidArgument` when `other` is a scalar or
    /// `Value::Null`. The container is left unchanged in that case.
    fn merge<T: Into<Value>>(&mut self, other: T) -> Result<&mut Self, EaterError> {
        let other = other.into();
        let kind = other.kind();
        let Some(entries) = other.into_entries() else {
            warn!("refusing to merge {kind}");
            return Err(EaterError::InvalidArgument(
                "Only array or Eater are expected for merge.".to_string(),
            ));
        };
        let incoming: Vec<_> = entries
            .into_iter()
            .map(|(name, value)| (self.format(&name), value))
            .collect();
        debug!(
            "merging {} entries into {} existing",
            incoming.len(),
            self.len()
        );
        let current = self.store().clone();
        let merged = merge::merge_entries(current, incoming);
        Ok(self.replace_data(Value::Map(merged), false))
    }

    /// Calls an accessor by name, the way a dynamic caller would.
    ///
    /// The first three characters select the action and the rest of the name
    /// is the raw key:
    ///
    /// - `setFoo(v)` stores the first argument (or `Value::Null`)
    /// - `getFoo()` reads the key; `getFoo(field)` drills into it
    /// - `hasFoo()` checks for the key
    /// - `unsFoo()` and `unsetFoo()` remove the key
    ///
    /// Any other prefix yields [`Dispatch::Undefined`].
    ///
    /// # Examples
    ///
    /// ```
    /// use eater::{DataContainer, Dispatch, Eater, Value};
    ///
    /// let mut eater = Eater::new();
    /// eater.invoke("setFooBar", &[Value::from(5)]);
    ///
    /// assert_eq!(eater.invoke("getFooBar", &[]), Dispatch::Value(Value::Int(5)));
    /// assert_eq!(eater.get_data("foo_bar"), Some(&Value::Int(5)));
    /// assert_eq!(eater.invoke("unsetFooBar", &[]), Dispatch::Modified);
    /// assert_eq!(eater.invoke("hasFooBar", &[]), Dispatch::Exists(false));
    /// ```
    fn invoke(&mut self, method: &str, args: &[Value]) -> Dispatch {
        let Some((accessor, name)) = dispatch::parse(method) else {
            debug!("`{method}` is not an accessor");
            return Dispatch::Undefined;
        };
        match accessor {
            Accessor::Set => {
                self.set_data(name, args.first().cloned().unwrap_or_default());
                Dispatch::Modified
            }
            Accessor::Get => {
                let found = match dispatch::field_name(args.first()) {
                    Some(field) => self.get_field(name, &field),
                    None => self.get_data(name),
                };
                Dispatch::Value(found.cloned().unwrap_or_default())
            }
            Accessor::Has => Dispatch::Exists(self.has_data(name)),
            Accessor::Unset => {
                self.unset_data(name);
                Dispatch::Modified
            }
        }
    }

    /// Top-level entries in insertion order. Nested containers are yielded
    /// as values, not descended into.
    fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.store().iter()
    }

    fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.store().keys()
    }

    fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.store().values()
    }

    /// Number of top-level entries; entries of nested containers are not
    /// counted.
    fn len(&self) -> usize {
        self.store().len()
    }

    fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// Shallow copy of the entries. Nested containers stay containers.
    fn to_map(&self) -> Store {
        self.store().clone()
    }

    fn to_eater(&self) -> Eater {
        Eater::from(self.to_map())
    }

    /// Encodes the entries as JSON, lists staying lists.
    ///
    /// Nested containers are written as plain objects, unlike the durable
    /// serde form which tags them.
    fn to_json(&self) -> Result<String, EaterError> {
        json::to_plain_string(self.store())
    }

    /// Encodes the entries as object-shaped JSON.
    ///
    /// The result is always a JSON object, `{}` when empty, and nested lists
    /// are written as objects keyed by position.
    fn to_json_object(&self) -> Result<String, EaterError> {
        json::to_object_string(self.store())
    }
}

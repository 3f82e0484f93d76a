use crate::container::DataContainer;
use crate::value::{Store, Value, NULL};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A key/value data bag with normalized keys.
///
/// `Eater` owns its entries in insertion order. Keys are normalized on the
/// way in (`fooBar` is stored as `foo_bar`), values are untyped [`Value`]s and
/// may themselves be nested `Eater`s. The full API lives on the
/// [`DataContainer`] trait.
///
/// Indexing never panics on a miss: reading a missing key yields
/// `Value::Null`. Assigning through `IndexMut` inserts the key first.
///
/// # Examples
///
/// ```
/// use eater::{DataContainer, Eater, Value};
/// use serde_json::json;
///
/// let mut eater = Eater::from_data(json!({"fooBar": 1, "bar": {"baz": "BAZ"}}), true);
///
/// assert_eq!(eater["foo_bar"], Value::Int(1));
/// assert_eq!(eater["bar"]["baz"], Value::from("BAZ"));
/// assert_eq!(eater["missing"], Value::Null);
///
/// eater["qux"] = Value::from("QUX");
/// assert_eq!(eater.to_string(), r#"{"foo_bar":1,"bar":{"baz":"BAZ"},"qux":"QUX"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Eater {
    store: Store,
}

impl Eater {
    /// Creates a new, empty Eater.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Eater holding the entries of `data`.
    ///
    /// Follows [`DataContainer::add_data`]: values that are not mappings,
    /// lists or containers produce an empty Eater.
    pub fn from_data<T: Into<Value>>(data: T, recursive: bool) -> Self {
        let mut eater = Self::new();
        eater.add_data(data, recursive);
        eater
    }

    /// Consumes the Eater and returns its entries.
    pub fn into_store(self) -> Store {
        self.store
    }
}

impl DataContainer for Eater {
    fn store(&self) -> &Store {
        &self.store
    }

    fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

impl From<Store> for Eater {
    fn from(store: Store) -> Self {
        Self::from_data(store, false)
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Eater {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut eater = Self::new();
        for (key, value) in iter {
            eater.set_data(key.as_ref(), value);
        }
        eater
    }
}

impl Index<&str> for Eater {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get_data(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Eater {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        let key = self.format(key);
        self.store.entry(key).or_insert(Value::Null)
    }
}

impl IntoIterator for Eater {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a> IntoIterator for &'a Eater {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl fmt::Display for Eater {
    /// Object-shaped JSON, see [`DataContainer::to_json_object`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.to_json_object().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// The durable form is the store alone. Nested containers inside it are
// tagged by `Value` so they come back as containers.
impl Serialize for Eater {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.store.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Eater {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Store::deserialize(deserializer).map(Eater::from)
    }
}

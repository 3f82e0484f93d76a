use crate::container::DataContainer;
use crate::eater::Eater;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Backing storage of a container: normalized keys in insertion order.
pub type Store = IndexMap<String, Value>;

pub(crate) static NULL: Value = Value::Null;

/// Key wrapping a nested container in the durable serde form.
pub(crate) const EATER_TAG: &str = "$eater";

/// An untyped value held by a container.
///
/// Values form a tree: lists and mappings hold further values, and a value may
/// itself be a nested [`Eater`]. Mapping keys are kept exactly as given; only
/// container keys are normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Store),
    Eater(Eater),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for values a container accepts as bulk data: mappings, lists and
    /// containers.
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_) | Value::Eater(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Store> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_eater(&self) -> Option<&Eater> {
        match self {
            Value::Eater(eater) => Some(eater),
            _ => None,
        }
    }

    pub fn as_eater_mut(&mut self) -> Option<&mut Eater> {
        match self {
            Value::Eater(eater) => Some(eater),
            _ => None,
        }
    }

    /// Looks up `field` inside this value.
    ///
    /// Mappings are indexed by the raw field, containers by the normalized
    /// field, and lists by the field parsed as a position. Scalars have no
    /// fields, so the lookup is a soft miss.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(field),
            Value::Eater(eater) => eater.get(field),
            Value::List(items) => field.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Value::get`].
    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(field),
            Value::Eater(eater) => eater.get_data_mut(field),
            Value::List(items) => field
                .parse::<usize>()
                .ok()
                .and_then(move |i| items.get_mut(i)),
            _ => None,
        }
    }

    /// Entries of a bulk value, keyed the way a container sees them.
    ///
    /// Lists are keyed by their decimal position. Non-collections yield `None`.
    pub(crate) fn into_entries(self) -> Option<Vec<(String, Value)>> {
        match self {
            Value::Map(map) => Some(map.into_iter().collect()),
            Value::Eater(eater) => Some(eater.into_store().into_iter().collect()),
            Value::List(items) => Some(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Soft-miss indexing: missing fields and scalars yield `Value::Null`.
    fn index(&self, field: &str) -> &Value {
        self.get(field).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, position: usize) -> &Value {
        match self {
            Value::List(items) => items.get(position).unwrap_or(&NULL),
            other => other.get(&position.to_string()).unwrap_or(&NULL),
        }
    }
}

impl IndexMut<&str> for Value {
    /// Assigns into mappings and containers, inserting `Value::Null` for a
    /// missing field. A `Value::Null` is first turned into an empty mapping.
    ///
    /// # Panics
    ///
    /// Panics when the value is a list or a scalar.
    fn index_mut(&mut self, field: &str) -> &mut Value {
        if self.is_null() {
            *self = Value::Map(Store::new());
        }
        match self {
            Value::Map(map) => map.entry(field.to_owned()).or_insert(Value::Null),
            Value::Eater(eater) => &mut eater[field],
            other => panic!("cannot assign field `{field}` into {}", other.kind()),
        }
    }
}

impl Value {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::Float(_) => "a float",
            Value::String(_) => "a string",
            Value::List(_) => "a list",
            Value::Map(_) => "a mapping",
            Value::Eater(_) => "a container",
        }
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                /// Falls back to `Value::Float` past `i64::MAX`.
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
                }
            }
        )*
    };
}

from_wide_integer!(u64, usize, isize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Store> for Value {
    fn from(map: Store) -> Self {
        Value::Map(map)
    }
}

impl From<Eater> for Value {
    fn from(eater: Eater) -> Self {
        Value::Eater(eater)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Float(f) => serde_json::Value::from(f),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
            Value::Eater(eater) => serde_json::Value::Object(
                eater
                    .into_store()
                    .into_iter()
                    .map(|(k, v)| (k, v.into()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Eater(eater) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(EATER_TAG, eater)?;
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Store::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        if map.len() == 1 && matches!(map.get(EATER_TAG), Some(Value::Map(_))) {
            if let Some(Value::Map(entries)) = map.shift_remove(EATER_TAG) {
                return Ok(Value::Eater(Eater::from(entries)));
            }
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

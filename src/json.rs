//! JSON text for containers.
//!
//! Two encodings: plain JSON, where nested containers are ordinary objects
//! and lists stay arrays, and object-shaped JSON, where lists are written as
//! objects keyed by position so an empty or purely sequential payload keeps
//! the same shape as an associative one.

use crate::container::DataContainer;
use crate::error::EaterError;
use crate::value::{Store, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};

struct Plain<'a>(&'a Value);

struct PlainStore<'a>(&'a Store);

impl Serialize for Plain<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::List(items) => serializer.collect_seq(items.iter().map(Plain)),
            Value::Map(entries) => PlainStore(entries).serialize(serializer),
            Value::Eater(eater) => PlainStore(eater.store()).serialize(serializer),
            scalar => scalar.serialize(serializer),
        }
    }
}

impl Serialize for PlainStore<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, value)| (key, Plain(value))))
    }
}

struct ObjectShaped<'a>(&'a Value);

struct ObjectShapedStore<'a>(&'a Store);

impl Serialize for ObjectShaped<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::List(items) => {
                let mut map = serializer.serialize_map(Some(items.len()))?;
                for (position, item) in items.iter().enumerate() {
                    map.serialize_entry(&position.to_string(), &ObjectShaped(item))?;
                }
                map.end()
            }
            Value::Map(entries) => ObjectShapedStore(entries).serialize(serializer),
            Value::Eater(eater) => ObjectShapedStore(eater.store()).serialize(serializer),
            scalar => scalar.serialize(serializer),
        }
    }
}

impl Serialize for ObjectShapedStore<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, &ObjectShaped(value))?;
        }
        map.end()
    }
}

/// Encodes `store` as plain JSON text, without container tags.
pub(crate) fn to_plain_string(store: &Store) -> Result<String, EaterError> {
    Ok(serde_json::to_string(&PlainStore(store))?)
}

/// Encodes `store` as object-shaped JSON text.
pub(crate) fn to_object_string(store: &Store) -> Result<String, EaterError> {
    Ok(serde_json::to_string(&ObjectShapedStore(store))?)
}

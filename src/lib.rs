//! # eater
//!
//! A key/value data bag with normalized keys, dynamic accessors and deep merging.
//!
//! `eater` provides a single container, [`Eater`], that stores untyped
//! [`Value`]s under string keys. Keys are normalized on the way in, so
//! `fooBar`, `FooBar` and `foo_bar` all address the same entry. Entries keep
//! their insertion order.
//!
//! ## Key Features
//!
//! - **Normalized keys**: camelCase keys are stored as snake_case
//! - **Soft misses**: reading a missing key yields `None` or `Value::Null`, never an error
//! - **Deep merge**: nested mappings merge by key, lists are concatenated
//! - **Dynamic accessors**: `getFooBar` / `setFooBar` style calls through [`DataContainer::invoke`]
//! - **Object-shaped text**: containers always print as JSON objects, even when empty
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use eater::{DataContainer, Eater, Value};
//!
//! let mut eater = Eater::new();
//!
//! eater
//!     .set_data("foo", "FOO")
//!     .set_data("fooBar", "FOO_BAR")
//!     .set_data("foobar", "FOOBAR");
//!
//! // Every spelling of a key reaches the same slot
//! assert_eq!(eater.get_data("fooBar"), Some(&Value::from("FOO_BAR")));
//! assert_eq!(eater.get_data("foo_bar"), Some(&Value::from("FOO_BAR")));
//! assert_eq!(eater["FooBar"], Value::from("FOO_BAR"));
//!
//! // `foobar` has no case boundary and stays a distinct key
//! assert_eq!(eater["foobar"], Value::from("FOOBAR"));
//!
//! // Misses are soft
//! assert_eq!(eater.get_data("missing"), None);
//! assert_eq!(eater["missing"], Value::Null);
//! ```
//!
//! ### Nested Containers
//!
//! ```rust
//! use eater::{DataContainer, Eater, Value};
//! use serde_json::json;
//!
//! // `recursive` turns nested mappings into nested Eaters
//! let eater = Eater::from_data(json!({"bar": {"bazQux": "BAZ"}}), true);
//!
//! assert!(eater["bar"].as_eater().is_some());
//! assert_eq!(eater["bar"]["baz_qux"], Value::from("BAZ"));
//! assert_eq!(eater.get_field("bar", "bazQux"), Some(&Value::from("BAZ")));
//!
//! // Only top-level entries are counted
//! assert_eq!(eater.len(), 1);
//! ```
//!
//! ### Merging
//!
//! ```rust
//! use eater::{DataContainer, Eater, EaterError, Value};
//! use serde_json::json;
//!
//! let mut eater = Eater::from_data(json!({"a": 1, "b": [1, 2]}), false);
//! eater.merge(json!({"a": 2, "b": [3, 4]}))?;
//!
//! assert_eq!(eater["a"], Value::Int(2));
//! assert_eq!(eater["b"], Value::from(vec![1, 2, 3, 4]));
//!
//! // Only collections can be merged
//! assert!(matches!(eater.merge(42), Err(EaterError::InvalidArgument(_))));
//! # Ok::<(), EaterError>(())
//! ```
//!
//! ### Dynamic Accessors
//!
//! ```rust
//! use eater::{DataContainer, Dispatch, Eater, Value};
//!
//! let mut eater = Eater::new();
//!
//! eater.invoke("setQux", &[Value::from("QUX")]);
//! assert_eq!(eater.invoke("getQux", &[]).into_value(), Value::from("QUX"));
//! assert_eq!(eater.invoke("hasQux", &[]), Dispatch::Exists(true));
//!
//! eater.invoke("unsQux", &[]);
//! assert_eq!(eater.invoke("hasQux", &[]), Dispatch::Exists(false));
//!
//! // Unknown prefixes do nothing
//! assert!(eater.invoke("fetchQux", &[]).is_undefined());
//! ```
//!
//! ### Serialization
//!
//! ```rust
//! use eater::{DataContainer, Eater};
//!
//! let mut eater = Eater::new();
//! assert_eq!(eater.to_string(), "{}");
//!
//! eater.set_data("tags", vec!["a", "b"]);
//! assert_eq!(eater.to_string(), r#"{"tags":{"0":"a","1":"b"}}"#);
//! assert_eq!(eater.to_json().unwrap(), r#"{"tags":["a","b"]}"#);
//!
//! // The durable form is the entries alone
//! let text = serde_json::to_string(&eater).unwrap();
//! let restored: Eater = serde_json::from_str(&text).unwrap();
//! assert_eq!(restored, eater);
//! ```

mod container;
mod dispatch;
mod eater;
mod error;
mod json;
mod key;
mod merge;
mod value;


pub use container::DataContainer;
pub use dispatch::Dispatch;
pub use eater::Eater;
pub use error::EaterError;
pub use key::format;
pub use merge::{merge_entries, merge_recursive};
pub use value::{Store, Value};

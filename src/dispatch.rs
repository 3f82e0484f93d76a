use crate::value::Value;

/// Result of a dynamic accessor call made through
/// [`DataContainer::invoke`](crate::DataContainer::invoke).
///
/// The dynamic form exists for callers that address keys by accessor name
/// (`getFooBar`, `setFooBar`, ...). The typed methods on
/// [`DataContainer`](crate::DataContainer) are the primary interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// A `set...`, `uns...` or `unset...` call modified the container
    Modified,
    /// A `get...` call; `Value::Null` on a soft miss
    Value(Value),
    /// A `has...` call
    Exists(bool),
    /// The method name carries no known accessor prefix
    Undefined,
}

impl Dispatch {
    /// Collapses the outcome into a value, the way a dynamic caller sees it.
    pub fn into_value(self) -> Value {
        match self {
            Dispatch::Value(value) => value,
            Dispatch::Exists(flag) => Value::Bool(flag),
            Dispatch::Modified | Dispatch::Undefined => Value::Null,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Dispatch::Undefined)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Accessor {
    Set,
    Get,
    Has,
    Unset,
}

/// Splits an accessor name into its action and the raw key that follows it.
///
/// Only the first three characters select the action. `unset` is stripped as
/// a whole when present, so `unsFoo` and `unsetFoo` address the same key.
pub(crate) fn parse(method: &str) -> Option<(Accessor, &str)> {
    let (accessor, prefix_len) = match method.get(..3)? {
        "set" => (Accessor::Set, 3),
        "get" => (Accessor::Get, 3),
        "has" => (Accessor::Has, 3),
        "uns" if method.starts_with("unset") => (Accessor::Unset, 5),
        "uns" => (Accessor::Unset, 3),
        _ => return None,
    };
    Some((accessor, &method[prefix_len..]))
}

/// Reads a call argument as a field name for `get...` drill-down.
pub(crate) fn field_name(arg: Option<&Value>) -> Option<String> {
    match arg? {
        Value::String(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "" }.to_string()),
        _ => None,
    }
}

use eater::{format, DataContainer, Dispatch, Eater, EaterError, Store, Value};
use serde_json::json;

#[test]
fn test_basic_operations() {
    let mut eater = Eater::new();

    // Store values under several spellings
    eater
        .set_data("foo", "FOO")
        .set_data("fooBar", "FOO_BAR")
        .set_data("foobar", "FOOBAR");

    // Check the keys exist in normalized form
    assert!(eater.has_data("foo"));
    assert!(eater.has_data("foo_bar"));
    assert!(eater.has_data("FooBar"));
    assert_eq!(eater.len(), 3);

    // Read them back by any spelling
    assert_eq!(eater.get_data("foo"), Some(&Value::from("FOO")));
    assert_eq!(eater["fooBar"], Value::from("FOO_BAR"));
    assert_eq!(eater["foo_bar"], Value::from("FOO_BAR"));
    assert_eq!(eater["foobar"], Value::from("FOOBAR"));

    // Remove one
    eater.unset_data("fooBar");
    assert!(!eater.has_data("foo_bar"));
    assert_eq!(eater.len(), 2);
}

#[test]
fn test_format_idempotent() {
    for key in ["", "a", "fooBar", "FooBar", "ABCDef", "x_Y_z", "snake_case", "Été", "a1B2"] {
        let once = format(key);
        assert_eq!(format(&once), once);
    }
}

#[test]
fn test_normalization_equivalence() {
    assert_eq!(format("fooBar"), "foo_bar");
    assert_eq!(format("foo_bar"), "foo_bar");

    let mut eater = Eater::new();
    eater.set_data("fooBar", 1);
    assert_eq!(eater.get_data("foo_bar"), Some(&Value::Int(1)));
}

#[test]
fn test_round_trip_flat_mapping() {
    let source = json!({"alpha": 1, "betaGamma": "two", "delta": [3], "epsilon": null});
    let mut eater = Eater::new();
    eater.replace_data(source, false);

    let expected: Store = [
        ("alpha", Value::Int(1)),
        ("beta_gamma", Value::from("two")),
        ("delta", Value::from(vec![3])),
        ("epsilon", Value::Null),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    assert_eq!(eater.data(), &expected);
    let keys: Vec<_> = eater.keys().cloned().collect();
    assert_eq!(keys, vec!["alpha", "beta_gamma", "delta", "epsilon"]);
}

#[test]
fn test_absence_contract() {
    let eater = Eater::new();
    assert_eq!(eater.get_data("missing"), None);
    assert!(!eater.has_data("missing"));
    assert!(!eater.has_any_data());
    assert_eq!(eater["missing"], Value::Null);
}

#[test]
fn test_bulk_replace() {
    let mut eater = Eater::new();
    eater.replace_data(json!({"one": 1, "two": 2}), false);
    eater.replace_data(json!({"threeFour": 34}), false);

    assert_eq!(eater.len(), 1);
    assert_eq!(eater["three_four"], Value::Int(34));
    assert!(!eater.has_data("one"));
}

#[test]
fn test_merge_type_guard() -> Result<(), EaterError> {
    let mut eater = Eater::new();

    let err = eater.merge(42).unwrap_err();
    assert!(matches!(err, EaterError::InvalidArgument(_)));
    assert_eq!(
        err.to_string(),
        "Invalid argument: Only array or Eater are expected for merge."
    );
    assert!(matches!(eater.merge("str"), Err(EaterError::InvalidArgument(_))));

    eater.merge(json!([]))?;
    eater.merge(Eater::new())?;
    assert!(eater.is_empty());
    Ok(())
}

#[test]
fn test_merge_deep_combine() -> Result<(), EaterError> {
    let mut eater = Eater::from_data(json!({"a": 1, "b": [1, 2]}), false);
    eater.merge(json!({"a": 2, "b": [3, 4]}))?;

    assert_eq!(eater["a"], Value::Int(2));
    assert_eq!(eater["b"], Value::from(vec![1, 2, 3, 4]));
    Ok(())
}

#[test]
fn test_merge_with_container() -> Result<(), EaterError> {
    let mut left = Eater::from_data(json!({"shared": {"x": 1}, "only_left": true}), false);
    let right = Eater::from_data(json!({"shared": {"y": 2}, "onlyRight": true}), false);

    left.merge(right)?.set_data("after", "chained");

    assert_eq!(left["shared"], Value::from(json!({"x": 1, "y": 2})));
    assert_eq!(left["only_left"], Value::Bool(true));
    assert_eq!(left["only_right"], Value::Bool(true));
    assert_eq!(left["after"], Value::from("chained"));
    Ok(())
}

#[test]
fn test_merge_appends_colliding_positions() -> Result<(), EaterError> {
    let mut eater = Eater::from_data(json!(["a", "b"]), false);
    eater.merge(json!(["c"]))?;

    assert_eq!(eater.len(), 3);
    assert_eq!(eater["0"], Value::from("a"));
    assert_eq!(eater["1"], Value::from("b"));
    assert_eq!(eater["2"], Value::from("c"));

    // Named keys still overwrite
    let mut named = Eater::from_data(json!({"0": "x", "name": "old"}), false);
    named.merge(json!({"0": "y", "name": "new"}))?;
    assert_eq!(named.to_json()?, r#"{"0":"x","name":"new","1":"y"}"#);
    Ok(())
}

#[test]
fn test_recursive_replace_wraps_every_level() {
    let mut eater = Eater::new();
    eater.set_data("stale", 1);
    eater.replace_data(json!({"a": {"b": {"cD": 1}}}), true);

    assert!(!eater.has_data("stale"));
    let a = eater["a"].as_eater().expect("a is a container");
    let b = a["b"].as_eater().expect("b is a container");
    assert_eq!(b.get_data("c_d"), Some(&Value::Int(1)));
    assert_eq!(eater["a"]["b"]["cD"], Value::Int(1));
}

#[test]
fn test_nested_containers_survive_save_and_restore() {
    let mut eater = Eater::from_data(json!({"top": {"nestedKey": 1}}), true);
    eater.set_data("list", vec![1, 2]);

    let saved = serde_json::to_string(&eater).unwrap();
    let restored: Eater = serde_json::from_str(&saved).unwrap();

    assert_eq!(restored, eater);
    assert!(restored["top"].as_eater().is_some());
    assert_eq!(restored.get_field("top", "nestedKey"), Some(&Value::Int(1)));
    assert_eq!(restored.to_json().unwrap(), eater.to_json().unwrap());
}

#[test]
fn test_nested_container_mutated_through_parent() {
    let mut eater = Eater::from_data(json!({"child": {"a": 1}}), true);

    eater
        .get_data_mut("child")
        .and_then(Value::as_eater_mut)
        .expect("child is a container")
        .set_data("newKey", 2);

    assert_eq!(eater.get_field("child", "new_key"), Some(&Value::Int(2)));
    assert_eq!(eater.len(), 1);
}

#[test]
fn test_dynamic_dispatch_parity() {
    let mut eater = Eater::new();

    assert_eq!(eater.invoke("setFoo", &[Value::from(5)]), Dispatch::Modified);
    assert_eq!(eater.invoke("getFoo", &[]), Dispatch::Value(Value::Int(5)));
    assert_eq!(eater.invoke("hasFoo", &[]), Dispatch::Exists(true));

    eater.invoke("unsFoo", &[]);
    assert_eq!(eater.invoke("hasFoo", &[]), Dispatch::Exists(false));

    eater.invoke("setFoo", &[Value::from(5)]);
    eater.invoke("unsetFoo", &[]);
    assert_eq!(eater.invoke("hasFoo", &[]), Dispatch::Exists(false));
}

#[test]
fn test_iteration_order_and_scope() {
    let mut eater = Eater::new();
    let populated = Eater::from_data(json!({"a": 1, "b": 2, "c": 3}), false);

    eater.set_data("x", 1).set_data("y", populated).set_data("z", 3);

    let keys: Vec<_> = eater.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["x", "y", "z"]);
    assert_eq!(eater.len(), 3);

    let owned: Vec<(String, Value)> = eater.into_iter().collect();
    assert_eq!(owned[1].0, "y");
    assert_eq!(owned[1].1.as_eater().map(|e| e.len()), Some(3));
}

#[test]
fn test_serialization_shape() {
    let eater = Eater::new();
    assert_eq!(eater.to_string(), "{}");
    assert_eq!(eater.to_json_object().unwrap(), "{}");
    assert_eq!(eater.to_json().unwrap(), "{}");

    let sequential = Eater::from_data(json!(["a", "b"]), false);
    assert_eq!(sequential.to_string(), r#"{"0":"a","1":"b"}"#);
}

#[test]
fn test_json_value_interop() {
    let mut eater = Eater::from_data(json!({"name": "x"}), false);
    eater.set_data("child", Eater::from_data(json!({"nestedKey": [1, 2]}), false));

    let exported = serde_json::Value::from(Value::from(eater));
    assert_eq!(
        exported,
        json!({"name": "x", "child": {"nested_key": [1, 2]}})
    );
}

// Walks through the same steps as the demo in demos/tour.rs
#[test]
fn test_full_walkthrough() -> Result<(), EaterError> {
    let mut eat = Eater::new();
    eat.replace_data(
        json!({
            "foo": "FOO",
            "fooBar": "FOO_BAR",
            "foobar": "FOOBAR",
        }),
        false,
    );
    eat.set_data("bar", Eater::from_data(json!({"baz": "BAZ"}), false));

    // Nested access through every route
    assert_eq!(eat["bar"]["baz"], Value::from("BAZ"));
    assert_eq!(eat.get_field("bar", "baz"), Some(&Value::from("BAZ")));
    assert_eq!(
        eat.invoke("getBar", &[]).into_value().get("baz"),
        Some(&Value::from("BAZ"))
    );

    // Each removal route is harmless once the key is gone
    eat.invoke("unsBar", &[]);
    eat.invoke("unsetBar", &[]);
    eat.remove("bar");
    eat.unset_data("bar");

    let values: Vec<_> = eat.values().filter_map(Value::as_str).collect();
    assert_eq!(values, vec!["FOO", "FOO_BAR", "FOOBAR"]);

    // Each write route hits the same key
    eat.invoke("setQux", &[Value::from("QUX")]);
    eat["qux"] = Value::from("QUX");
    eat.set_data("qux", "QUX");
    assert_eq!(eat.len(), 4);

    // Durable round trip
    let serial = serde_json::to_string(&eat)?;
    let restored: Eater = serde_json::from_str(&serial)?;
    assert_eq!(restored, eat);
    assert_eq!(
        restored.to_string(),
        r#"{"foo":"FOO","foo_bar":"FOO_BAR","foobar":"FOOBAR","qux":"QUX"}"#
    );

    eat.clear_data();
    assert!(eat.data().is_empty());
    Ok(())
}

use eater::{DataContainer, Eater, EaterError, Value};
use log::info;
use serde_json::json;

fn show(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "(null)".to_string(),
        other => format!("{:?}", other),
    }
}

fn main() -> Result<(), EaterError> {
    env_logger::init();

    let mut eat = Eater::new();

    // Set sample data
    eat.replace_data(
        json!({
            "foo": "FOO",
            "fooBar": "FOO_BAR",
            "foobar": "FOOBAR",
        }),
        false,
    );
    eat.set_data("bar", Eater::from_data(json!({"baz": "BAZ"}), false));

    // FOO
    println!(
        "{} {} {}",
        show(&eat.invoke("getFoo", &[]).into_value()),
        show(&eat["foo"]),
        show(eat.get_data("foo").unwrap_or(&Value::Null)),
    );

    // FOO_BAR
    println!(
        "{} {} {} {}",
        show(&eat.invoke("getFooBar", &[]).into_value()),
        show(&eat["fooBar"]),
        show(&eat["foo_bar"]),
        show(eat.get_data("fooBar").unwrap_or(&Value::Null)),
    );

    // FOOBAR
    println!(
        "{} {}",
        show(&eat.invoke("getFoobar", &[]).into_value()),
        show(&eat["foobar"]),
    );

    // BAZ
    println!(
        "{} {} {}",
        show(&eat["bar"]["baz"]),
        show(&eat.invoke("getBar", &[Value::from("baz")]).into_value()),
        show(eat.get_field("bar", "baz").unwrap_or(&Value::Null)),
    );

    // Unset bar, every route
    eat.invoke("unsBar", &[]);
    eat.invoke("unsetBar", &[]);
    eat.remove("bar");
    eat.unset_data("bar");

    // FOO FOO_BAR FOOBAR
    for (_, value) in &eat {
        print!("{} ", show(value));
    }
    println!();

    // Add QUX
    eat.invoke("setQux", &[Value::from("QUX")]);
    eat["qux"] = Value::from("QUX");
    eat.set_data("qux", "QUX");

    // Durable form and back
    let serial = serde_json::to_string(&eat)?;
    println!("{}", serial);
    let eat: Eater = serde_json::from_str(&serial)?;
    println!("{}", eat);

    let mut eat = eat;
    info!("clearing {} entries", eat.len());
    eat.clear_data();
    println!("{}", eat);

    Ok(())
}

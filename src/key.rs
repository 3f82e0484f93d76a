use regex::Regex;
use std::sync::OnceLock;

static BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn boundary() -> &'static Regex {
    BOUNDARY.get_or_init(|| Regex::new(r"(.)([A-Z])").expect("key boundary pattern is valid"))
}

/// Normalizes a key into its stored form.
///
/// An underscore is inserted between any character and an uppercase ASCII
/// letter that follows it, then the whole key is lowercased. Matches do not
/// overlap, so a run of capitals is split pairwise.
///
/// A leading capital has nothing before it and therefore gains no underscore.
///
/// # Examples
///
/// ```
/// use eater::format;
///
/// assert_eq!(format("fooBar"), "foo_bar");
/// assert_eq!(format("FooBar"), "foo_bar");
/// assert_eq!(format("foo_bar"), "foo_bar");
/// assert_eq!(format("Foo"), "foo");
/// assert_eq!(format("ABC"), "a_bc");
/// ```
pub fn format(key: &str) -> String {
    boundary()
        .replace_all(key, "${1}_${2}")
        .to_ascii_lowercase()
}

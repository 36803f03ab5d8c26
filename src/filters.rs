//! Helper filters and functions available inside templates.
//!
//! Case conversions come from `cruet`; the remaining helpers cover string
//! trimming, quoting and explicit failure.

use minijinja::{Environment, Error, ErrorKind, Value};

/// Registers every helper on `env`.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("snake_case", snake_case);
    env.add_filter("camel_case", camel_case);
    env.add_filter("pascal_case", pascal_case);
    env.add_filter("kebab_case", kebab_case);
    env.add_filter("screaming_snake_case", screaming_snake_case);
    env.add_filter("title_case", title_case);
    env.add_filter("train_case", train_case);

    env.add_filter("quote", quote);
    env.add_filter("squote", squote);
    env.add_filter("trim_prefix", trim_prefix);
    env.add_filter("trim_suffix", trim_suffix);

    env.add_function("required", required);
    env.add_function("fail", fail);
}

pub fn snake_case(value: String) -> String {
    cruet::to_snake_case(&value)
}

pub fn camel_case(value: String) -> String {
    cruet::to_camel_case(&value)
}

pub fn pascal_case(value: String) -> String {
    cruet::to_pascal_case(&value)
}

pub fn kebab_case(value: String) -> String {
    cruet::to_kebab_case(&value)
}

pub fn screaming_snake_case(value: String) -> String {
    cruet::to_screaming_snake_case(&value)
}

pub fn title_case(value: String) -> String {
    cruet::to_title_case(&value)
}

pub fn train_case(value: String) -> String {
    cruet::to_train_case(&value)
}

/// Wraps the value in double quotes, escaping embedded ones.
pub fn quote(value: String) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

pub fn squote(value: String) -> String {
    format!("'{value}'")
}

pub fn trim_prefix(value: String, prefix: String) -> String {
    match value.strip_prefix(prefix.as_str()) {
        Some(rest) => rest.to_string(),
        None => value,
    }
}

pub fn trim_suffix(value: String, suffix: String) -> String {
    match value.strip_suffix(suffix.as_str()) {
        Some(rest) => rest.to_string(),
        None => value,
    }
}

/// Returns `value` unchanged, or fails rendering with `message` when the
/// value is undefined, none or an empty string.
pub fn required(value: Value, message: String) -> Result<Value, Error> {
    let missing = value.is_undefined()
        || value.is_none()
        || value.as_str().is_some_and(|s| s.is_empty());
    if missing {
        return Err(Error::new(ErrorKind::InvalidOperation, message));
    }
    Ok(value)
}

/// Unconditionally fails rendering with `message`.
pub fn fail(message: String) -> Result<Value, Error> {
    Err(Error::new(ErrorKind::InvalidOperation, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_filters() {
        assert_eq!(snake_case("HelloWorld".into()), "hello_world");
        assert_eq!(kebab_case("hello_world".into()), "hello-world");
        assert_eq!(pascal_case("hello world".into()), "HelloWorld");
        assert_eq!(screaming_snake_case("helloWorld".into()), "HELLO_WORLD");
    }

    #[test]
    fn test_trim_filters() {
        assert_eq!(trim_prefix("v1.2.3".into(), "v".into()), "1.2.3");
        assert_eq!(trim_suffix("main.rs".into(), ".rs".into()), "main");
        assert_eq!(trim_suffix("main.rs".into(), ".py".into()), "main.rs");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("say \"hi\"".into()), "\"say \\\"hi\\\"\"");
        assert_eq!(squote("x".into()), "'x'");
    }

    #[test]
    fn test_required() {
        assert!(required(Value::UNDEFINED, "missing".into()).is_err());
        assert!(required(Value::from(""), "missing".into()).is_err());
        assert_eq!(required(Value::from(3), "missing".into()).unwrap(), Value::from(3));
    }
}

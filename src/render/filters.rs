//! MiniJinja function and filter registration.

use minijinja::value::Rest;
use minijinja::{Environment, Error, ErrorKind, Value};

use super::RenderMode;
use crate::style::{StyleTable, StyleToken};
use crate::util::combine_classes;

/// Registers the style token functions, filters and globals on an environment.
///
/// - `class(name)` and `name | class` resolve a single token
/// - `cx(a, b, ...)` joins several tokens, skipping empty ones
/// - `styles` exposes the whole table, e.g. `{{ styles.postTitle }}`
///
/// Class strings are returned as safe values so HTML auto-escaping leaves
/// them untouched.
pub fn register_style_functions(env: &mut Environment<'static>, mode: RenderMode) {
    env.add_function("class", move |name: String| -> Result<Value, Error> {
        resolve(&name, mode).map(Value::from_safe_string)
    });

    env.add_filter("class", move |name: String| -> Result<Value, Error> {
        resolve(&name, mode).map(Value::from_safe_string)
    });

    env.add_function("cx", move |names: Rest<String>| -> Result<Value, Error> {
        let parts = names
            .iter()
            .map(|name| resolve(name, mode))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::from_safe_string(combine_classes(
            parts.iter().map(String::as_str),
        )))
    });

    // Always the real values, regardless of mode.
    env.add_global("styles", Value::from_serialize(StyleTable::global()));
}

fn resolve(name: &str, mode: RenderMode) -> Result<String, Error> {
    let token = name.parse::<StyleToken>().map_err(|err| {
        tracing::warn!(token = name, "template referenced an unknown style token");
        Error::new(ErrorKind::InvalidOperation, err.to_string())
    })?;

    Ok(match mode {
        RenderMode::Classes => token.classes().to_string(),
        RenderMode::Debug => format!("[{}]", token.name()),
    })
}

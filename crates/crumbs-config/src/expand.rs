//! `${VAR}` and `${VAR:-default}` expansion for string options.

use crate::ConfigError;

/// Expand environment variable references in an option value.
///
/// Only braced references are looked up. A bare `$` (as in `$price` or a
/// `$` separator) is kept literally, even next to a `${VAR}` reference.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let escaped = escape_bare_dollars(value);
    shellexpand::env_with_context(&escaped, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

struct UnsetVar {
    name: String,
}

/// Double every `$` outside a `${...}` reference; shellexpand reads `$$` as `$`.
fn escape_bare_dollars(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 4);
    let mut rest = value;

    while let Some(idx) = rest.find('$') {
        result.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match rest[1..].starts_with('{').then(|| rest.find('}')).flatten() {
            Some(end) => {
                result.push_str(&rest[..=end]);
                rest = &rest[end + 1..];
            }
            None => {
                result.push_str("$$");
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([^{}]*)\}").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// Replaces `{name}` tokens with the matching value. Tokens without a value
/// are left as written, so SPARQL group braces pass through untouched.
pub fn supplant(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

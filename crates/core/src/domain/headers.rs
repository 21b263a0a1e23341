//! Request headers and sanitization.

use serde_json::Value;

/// JavaScript-style truthiness of a JSON value
///
/// `null`, `false`, numeric zero and `""` are falsy. Everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ordered header name → value list, built fresh per call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, replacing any entry whose name matches case-insensitively
    ///
    /// A replaced entry keeps its position and takes the new name's casing.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Drop every header whose value carries no information
///
/// Entries with a falsy value (see [`is_truthy`]) are removed; the rest
/// keep their input order. Strings are kept verbatim, other scalars
/// use their JSON text.
///
/// A literal `"0"` string is kept, but a numeric `0` is dropped.
pub fn sanitize_headers<I, K>(headers: I) -> HeaderSet
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut sanitized = HeaderSet::new();
    for (name, value) in headers {
        if !is_truthy(&value) {
            continue;
        }
        let rendered = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        sanitized.insert(name, rendered);
    }
    sanitized
}

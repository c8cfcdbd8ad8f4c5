use std::collections::HashMap;

/// Header names mapped to their raw values.
///
/// Names are stored lower-cased and looked up case-insensitively. Values are
/// kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.inner.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A request as read off the wire.
///
/// The request line is kept for logging only; method, path and version are
/// never interpreted.
#[derive(Debug, Clone)]
pub struct Request {
    pub request_line: String,
    pub headers: HeaderMap,
}

impl Request {
    /// Retrieves a header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Raw value of the `Cookie` header, if any.
    pub fn cookie_header(&self) -> Option<&str> {
        self.header("cookie")
    }
}

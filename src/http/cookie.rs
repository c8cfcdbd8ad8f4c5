//! `Cookie` request header decoding and `Set-Cookie` value encoding.

use std::collections::HashMap;
use std::fmt;
use std::time::SystemTime;

const PAIR_SEPARATOR: &str = "; ";

/// Cookies sent by the client, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    pairs: HashMap<String, String>,
}

impl Cookies {
    /// Parses a `Cookie` header value such as `user_id=User123_4; theme=dark`.
    ///
    /// Pairs are separated by `"; "` and split on their first `=`, so values
    /// may themselves contain `=`. A pair without `=` is dropped. When a
    /// name repeats, the last pair wins.
    pub fn parse(header: &str) -> Self {
        let pairs = header
            .split(PAIR_SEPARATOR)
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.get(name).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Looks up a non-empty cookie value in an optional `Cookie` header.
pub fn identity_from_header(header: Option<&str>, name: &str) -> Option<String> {
    let cookies = Cookies::parse(header?);
    cookies
        .get(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Formats a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn format_http_date(time: SystemTime) -> String {
    httpdate::fmt_http_date(time)
}

/// The value of a `Set-Cookie` response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub expires: SystemTime,
    pub path: String,
    pub http_only: bool,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, expires: SystemTime) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires,
            path: "/".to_string(),
            http_only: true,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Expires={}; Path={}",
            self.name,
            self.value,
            format_http_date(self.expires),
            self.path
        )?;

        if self.http_only {
            f.write_str("; HttpOnly")?;
        }

        Ok(())
    }
}

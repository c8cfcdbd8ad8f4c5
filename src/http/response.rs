use crate::http::cookie::SetCookie;

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// HTTP status codes produced by the server.
///
/// Failures never reach the client as an error status; the connection is
/// simply closed, so `200 OK` is the only code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use crumb::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers are kept in wire order.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a `200 OK` HTML response, optionally setting a cookie.
    pub fn html(body: impl Into<String>, set_cookie: Option<SetCookie>) -> Self {
        let mut builder = ResponseBuilder::new(StatusCode::Ok)
            .content_type(CONTENT_TYPE_HTML)
            .body(body.into().into_bytes());

        if let Some(cookie) = set_cookie {
            builder = builder.set_cookie(cookie);
        }

        builder.build()
    }

    /// Returns the first header value with the given name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for responses with a fixed header layout.
///
/// The built response always carries, in this order: `Content-Type`,
/// `Content-Length`, `Set-Cookie` (when one was given) and
/// `Connection: close`. `Content-Length` is computed from the encoded body
/// at build time and cannot be set by hand.
///
/// # Example
///
/// ```
/// # use crumb::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .body(b"hi".to_vec())
///     .build();
///
/// assert_eq!(response.header("Content-Length"), Some("2"));
/// assert_eq!(response.header("Connection"), Some("close"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    set_cookie: Option<SetCookie>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_HTML.to_string(),
            set_cookie: None,
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn set_cookie(mut self, cookie: SetCookie) -> Self {
        self.set_cookie = Some(cookie);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        let mut headers = vec![
            ("Content-Type".to_string(), self.content_type),
            ("Content-Length".to_string(), self.body.len().to_string()),
        ];

        if let Some(cookie) = self.set_cookie {
            headers.push(("Set-Cookie".to_string(), cookie.to_string()));
        }

        headers.push(("Connection".to_string(), "close".to_string()));

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

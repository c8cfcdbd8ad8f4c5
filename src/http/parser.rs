use crate::http::request::{HeaderMap, Request};

const HEADER_SEPARATOR: &str = ": ";

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was received before the peer closed.
    Empty,
    /// The request bytes are not valid UTF-8.
    InvalidUtf8,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::InvalidUtf8 => f.write_str("request is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Decodes raw request bytes and parses the header block.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidUtf8)?;
    Ok(parse_request_text(text))
}

/// Splits request text into the request line and a header map.
///
/// Tolerance rules:
/// - lines are separated by CRLF; the first line is skipped
/// - each header line is split on the first `": "`
/// - lines without that separator are dropped
/// - the first empty line ends the header block; anything after it is ignored
/// - a repeated header keeps the last value
pub fn parse_request_text(text: &str) -> Request {
    let mut lines = text.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();

    let mut headers = HeaderMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        let Some((name, value)) = line.split_once(HEADER_SEPARATOR) else {
            continue;
        };

        headers.insert(name, value);
    }

    Request {
        request_line,
        headers,
    }
}

/// Position of the `\r\n\r\n` that terminates the header block.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

use std::fmt::Write as _;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into its exact wire bytes.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut head = format!(
        "{HTTP_VERSION} {} {}\r\n",
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    for (name, value) in &resp.headers {
        // Writing into a String cannot fail
        let _ = write!(head, "{name}: {value}\r\n");
    }
    head.push_str("\r\n");

    let mut wire = head.into_bytes();
    wire.extend_from_slice(&resp.body);
    wire
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Writes the remaining bytes, then shuts down the write half so the
    /// peer sees end of stream.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.shutdown().await?;

        Ok(())
    }
}

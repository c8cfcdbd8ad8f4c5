use bytes::BytesMut;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::http::parser::{ParseError, find_headers_end, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::session::{SessionManager, Visitor};

/// Handles exactly one request on one accepted socket.
///
/// The socket is owned by the connection and released when it is dropped,
/// whichever state the connection stopped in.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    sessions: Arc<SessionManager>,
    buffer: BytesMut,
    max_request_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsing,
    Identifying(Request),
    Responding(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        sessions: Arc<SessionManager>,
        max_request_bytes: usize,
    ) -> Self {
        Self {
            stream,
            peer,
            sessions,
            buffer: BytesMut::with_capacity(max_request_bytes),
            max_request_bytes,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.read_request().await?;
                    self.state = ConnectionState::Parsing;
                }

                ConnectionState::Parsing => match parse_http_request(&self.buffer) {
                    Ok(request) => {
                        debug!(
                            peer = %self.peer,
                            request_line = %request.request_line,
                            headers = request.headers.len(),
                            "Parsed request"
                        );
                        self.state = ConnectionState::Identifying(request);
                    }
                    Err(ParseError::Empty) => {
                        debug!(peer = %self.peer, "Client closed without sending data");
                        self.state = ConnectionState::Closed;
                    }
                    Err(e) => {
                        self.state = ConnectionState::Closed;
                        return Err(e.into());
                    }
                },

                ConnectionState::Identifying(request) => {
                    let now = SystemTime::now();
                    let visitor = self.sessions.identify(request, now);

                    match &visitor {
                        Visitor::New { id, .. } => {
                            info!(peer = %self.peer, user_id = %id, "New visitor, assigning id")
                        }
                        Visitor::Returning { id } => {
                            info!(peer = %self.peer, user_id = %id, "Returning visitor identified")
                        }
                    }

                    let response = self.sessions.respond(&visitor, now);
                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::Responding(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    debug!(peer = %self.peer, bytes = writer.len(), "Response sent");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the end of the header block, end of stream, or the
    /// request size limit, whichever comes first.
    async fn read_request(&mut self) -> anyhow::Result<()> {
        while find_headers_end(&self.buffer).is_none() {
            let remaining = self.max_request_bytes.saturating_sub(self.buffer.len());
            if remaining == 0 {
                debug!(peer = %self.peer, "Request size limit reached, parsing what was read");
                break;
            }

            let mut chunk = (&mut self.stream).take(remaining as u64);
            let n = chunk.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed its write half
                break;
            }
        }

        Ok(())
    }
}

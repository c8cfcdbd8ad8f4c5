//! HTTP protocol handling over raw TCP streams.
//!
//! Only the slice of HTTP/1.1 needed to recognize visitors by cookie is
//! implemented: one request per connection, headers only, and a single
//! `200 OK` response followed by `Connection: close`.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine driving one request/response
//! - **`parser`**: lenient header parsing of the raw request text
//! - **`request`**: parsed request with a case-insensitive header map
//! - **`cookie`**: `Cookie` header decoding and `Set-Cookie` encoding
//! - **`response`**: response framing with a computed `Content-Length`
//! - **`writer`**: serializes a response and writes it to the socket
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request headers
//!        └──────┬──────┘
//!               │ Bytes received (zero bytes → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Parsing       │ ← Decode and split into headers
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   Identifying    │ ← New or returning visitor?
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! Any failure jumps straight to `Closed`; the socket is released when the
//! connection is dropped.

pub mod connection;
pub mod cookie;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

//! Crumb - cookie-based visitor identification
//!
//! A small HTTP/1.1 server speaking directly over TCP that recognizes
//! returning visitors by a `user_id` cookie.

pub mod config;
pub mod http;
pub mod server;
pub mod session;

//! Cookie-based visitor recognition.
//!
//! There is no server-side session store: a visitor is "returning" exactly
//! when its request carries a non-empty identity cookie, and "new" otherwise.
//! New visitors get an id from the shared [`IdAllocator`] and a `Set-Cookie`
//! header carrying it.

pub mod identity;
pub mod page;

pub use identity::{IdAllocator, VisitorId};

use std::time::{Duration, SystemTime};

use crate::config::SessionConfig;
use crate::http::cookie::{self, SetCookie};
use crate::http::request::Request;
use crate::http::response::Response;

/// Outcome of classifying one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visitor {
    /// No identity cookie; a new id was minted.
    New { id: VisitorId, expires: SystemTime },
    /// The identity presented by the client.
    Returning { id: String },
}

impl Visitor {
    pub fn user_id(&self) -> String {
        match self {
            Visitor::New { id, .. } => id.to_string(),
            Visitor::Returning { id } => id.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Visitor::New { .. })
    }
}

/// Shared by every connection handler; owns the visitor counter.
#[derive(Debug)]
pub struct SessionManager {
    ids: IdAllocator,
    cookie_name: String,
    cookie_path: String,
    cookie_ttl: Duration,
}

impl SessionManager {
    pub fn new(cfg: &SessionConfig) -> Self {
        Self {
            ids: IdAllocator::new(cfg.id_prefix.clone()),
            cookie_name: cfg.cookie_name.clone(),
            cookie_path: cfg.cookie_path.clone(),
            cookie_ttl: cfg.cookie_ttl(),
        }
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Decides whether the request comes from a new or a returning visitor.
    ///
    /// Only new visitors advance the shared counter.
    pub fn identify(&self, request: &Request, now: SystemTime) -> Visitor {
        match cookie::identity_from_header(request.cookie_header(), &self.cookie_name) {
            Some(id) => Visitor::Returning { id },
            None => Visitor::New {
                id: self.ids.allocate(),
                expires: now + self.cookie_ttl,
            },
        }
    }

    /// Builds the page for a classified visitor.
    pub fn respond(&self, visitor: &Visitor, now: SystemTime) -> Response {
        match visitor {
            Visitor::New { id, expires } => {
                let user_id = id.to_string();
                let body = page::new_visitor(
                    &user_id,
                    &self.cookie_name,
                    &cookie::format_http_date(*expires),
                );
                let set_cookie = SetCookie::new(&self.cookie_name, user_id, *expires)
                    .path(&self.cookie_path)
                    .http_only(true);

                Response::html(body, Some(set_cookie))
            }
            Visitor::Returning { id } => {
                let body = page::returning_visitor(id, &cookie::format_http_date(now));
                Response::html(body, None)
            }
        }
    }
}

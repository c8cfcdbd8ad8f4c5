use crumb::config::SessionConfig;
use crumb::http::parser::parse_request_text;
use crumb::session::{IdAllocator, SessionManager, Visitor};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

#[test]
fn test_id_shape() {
    let ids = IdAllocator::new("User");

    for expected in 1..=50u64 {
        let id = ids.allocate();
        assert!((100..=999).contains(&id.tag()));
        assert_eq!(id.sequence(), expected);
        assert_eq!(id.to_string(), format!("User{}_{}", id.tag(), expected));
    }
}

#[test]
fn test_allocators_are_independent() {
    let a = IdAllocator::new("User");
    let b = IdAllocator::new("Guest");

    a.allocate();
    a.allocate();

    let first_b = b.allocate();
    assert_eq!(first_b.sequence(), 1);
    assert!(first_b.to_string().starts_with("Guest"));
    assert_eq!(a.issued(), 2);
}

#[test]
fn test_concurrent_allocation_has_no_gaps_or_duplicates() {
    let ids = Arc::new(IdAllocator::new("User"));
    let threads = 8;
    let per_thread = 250;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let ids = Arc::clone(&ids);
            std::thread::spawn(move || {
                (0..per_thread)
                    .map(|_| ids.allocate().sequence())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for seq in handle.join().unwrap() {
            assert!(seen.insert(seq), "duplicate sequence {}", seq);
        }
    }

    let total = (threads * per_thread) as u64;
    assert_eq!(seen, (1..=total).collect::<HashSet<_>>());
    assert_eq!(ids.issued(), total);
}

#[test]
fn test_identify_new_visitor() {
    let sessions = SessionManager::new(&SessionConfig::default());
    let request = parse_request_text("GET / HTTP/1.1\r\nHost: x\r\n\r\n");
    let now = SystemTime::now();

    let visitor = sessions.identify(&request, now);

    match visitor {
        Visitor::New { id, expires } => {
            assert_eq!(id.sequence(), 1);
            assert_eq!(expires, now + Duration::from_secs(3600));
        }
        other => panic!("expected new visitor, got {:?}", other),
    }
}

#[test]
fn test_identify_returning_visitor_does_not_advance_counter() {
    let sessions = SessionManager::new(&SessionConfig::default());
    let request =
        parse_request_text("GET / HTTP/1.1\r\nCookie: theme=dark; user_id=User123_7\r\n\r\n");

    let visitor = sessions.identify(&request, SystemTime::now());

    assert_eq!(
        visitor,
        Visitor::Returning {
            id: "User123_7".to_string()
        }
    );
    assert!(!visitor.is_new());
    assert_eq!(sessions.ids().issued(), 0);
}

#[test]
fn test_cookie_without_user_id_is_new_visitor() {
    let sessions = SessionManager::new(&SessionConfig::default());
    let request = parse_request_text("GET / HTTP/1.1\r\nCookie: theme=dark; broken\r\n\r\n");

    assert!(sessions.identify(&request, SystemTime::now()).is_new());
}

#[test]
fn test_new_visitor_response_sets_cookie() {
    let sessions = SessionManager::new(&SessionConfig::default());
    let request = parse_request_text("GET / HTTP/1.1\r\n\r\n");
    let now = SystemTime::now();

    let visitor = sessions.identify(&request, now);
    let response = sessions.respond(&visitor, now);

    let set_cookie = response.header("Set-Cookie").unwrap();
    let user_id = visitor.user_id();
    assert!(set_cookie.starts_with(&format!("user_id={}; Expires=", user_id)));
    assert!(set_cookie.ends_with("; Path=/; HttpOnly"));

    let body = String::from_utf8(response.body.clone()).unwrap();
    assert!(body.contains(&user_id));
    assert_eq!(
        response.header("Content-Length"),
        Some(response.body.len().to_string().as_str())
    );
}

#[test]
fn test_returning_visitor_id_is_embedded_verbatim() {
    let sessions = SessionManager::new(&SessionConfig::default());
    let visitor = Visitor::Returning {
        id: "A&B<1>".to_string(),
    };

    let response = sessions.respond(&visitor, SystemTime::now());
    let body = String::from_utf8(response.body).unwrap();

    assert!(body.contains("Your ID: A&B<1>"));
    assert!(!body.contains("&amp;"));
}

#[test]
fn test_custom_cookie_settings() {
    let cfg = SessionConfig {
        cookie_name: "sid".to_string(),
        cookie_path: "/app".to_string(),
        cookie_ttl_secs: 60,
        id_prefix: "Guest".to_string(),
    };
    let sessions = SessionManager::new(&cfg);
    let now = SystemTime::now();

    let returning = sessions.identify(&parse_request_text("GET / HTTP/1.1\r\nCookie: sid=abc\r\n\r\n"), now);
    assert_eq!(returning.user_id(), "abc");

    let fresh = sessions.identify(&parse_request_text("GET / HTTP/1.1\r\nCookie: user_id=abc\r\n\r\n"), now);
    assert!(fresh.user_id().starts_with("Guest"));

    let response = sessions.respond(&fresh, now);
    let set_cookie = response.header("Set-Cookie").unwrap();
    assert!(set_cookie.starts_with("sid=Guest"));
    assert!(set_cookie.ends_with("; Path=/app; HttpOnly"));
}

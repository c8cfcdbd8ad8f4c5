use crumb::http::cookie::{Cookies, SetCookie, format_http_date, identity_from_header};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[test]
fn test_parse_single_cookie() {
    let cookies = Cookies::parse("user_id=User123_7");

    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies.get("user_id"), Some("User123_7"));
}

#[test]
fn test_parse_multiple_cookies() {
    let cookies = Cookies::parse("theme=dark; user_id=User123_7; lang=en");

    assert_eq!(cookies.len(), 3);
    assert_eq!(cookies.get("theme"), Some("dark"));
    assert_eq!(cookies.get("user_id"), Some("User123_7"));
    assert_eq!(cookies.get("lang"), Some("en"));
}

#[test]
fn test_pairs_without_equals_are_dropped() {
    let cookies = Cookies::parse("flag; user_id=User1_1; other");

    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies.get("user_id"), Some("User1_1"));
    assert_eq!(cookies.get("flag"), None);
}

#[test]
fn test_header_with_only_malformed_pairs_is_empty() {
    let cookies = Cookies::parse("flag; other");

    assert!(cookies.is_empty());
    assert_eq!(cookies.get("flag"), None);
}

#[test]
fn test_separator_requires_space() {
    // "a=1;user_id=x" is one pair named "a" with value "1;user_id=x"
    let cookies = Cookies::parse("a=1;user_id=x");

    assert_eq!(cookies.get("a"), Some("1;user_id=x"));
    assert_eq!(cookies.get("user_id"), None);
}

#[test]
fn test_identity_from_header() {
    assert_eq!(
        identity_from_header(Some("user_id=User123_7; other=1"), "user_id"),
        Some("User123_7".to_string())
    );
    assert_eq!(identity_from_header(Some("other=1"), "user_id"), None);
    assert_eq!(identity_from_header(None, "user_id"), None);
    assert_eq!(identity_from_header(Some(""), "user_id"), None);
}

#[test]
fn test_empty_identity_counts_as_missing() {
    assert_eq!(identity_from_header(Some("user_id="), "user_id"), None);
}

#[test]
fn test_set_cookie_format() {
    let expires = UNIX_EPOCH + Duration::from_secs(784_111_777);
    let cookie = SetCookie::new("user_id", "User123_7", expires);

    assert_eq!(
        cookie.to_string(),
        "user_id=User123_7; Expires=Sun, 06 Nov 1994 08:49:37 GMT; Path=/; HttpOnly"
    );
}

#[test]
fn test_set_cookie_without_http_only() {
    let expires = UNIX_EPOCH + Duration::from_secs(784_111_777);
    let cookie = SetCookie::new("sid", "v", expires).path("/app").http_only(false);

    assert_eq!(
        cookie.to_string(),
        "sid=v; Expires=Sun, 06 Nov 1994 08:49:37 GMT; Path=/app"
    );
}

#[test]
fn test_expires_has_fixed_shape() {
    let formatted = format_http_date(SystemTime::now());
    let parts: Vec<&str> = formatted.split(' ').collect();

    assert_eq!(parts.len(), 6);
    assert!(parts[0].ends_with(','));
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 3);
    assert_eq!(parts[3].len(), 4);
    assert_eq!(parts[4].len(), 8);
    assert_eq!(parts[5], "GMT");
}

#[test]
fn test_set_cookie_value_decodes_back() {
    let expires = SystemTime::now() + Duration::from_secs(3600);
    let set_cookie = SetCookie::new("user_id", "User456_12", expires).to_string();

    // The browser sends back only the leading name=value pair
    let pair = set_cookie.split("; ").next().unwrap();

    assert_eq!(
        identity_from_header(Some(pair), "user_id"),
        Some("User456_12".to_string())
    );
}

//! HTML bodies for the two visitor pages.
//!
//! Identity values are embedded exactly as received.

const STYLE: &str = r#"        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, ACCENT_A 0%, ACCENT_B 100%);
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            margin: 0;
        }
        .container {
            background: white;
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.2);
            text-align: center;
            max-width: 500px;
        }
        h1 { color: ACCENT_A; margin-bottom: 20px; font-size: 2.5em; }
        .icon { font-size: 4em; margin-bottom: 20px; }
        .user-id {
            background: linear-gradient(135deg, ACCENT_A 0%, ACCENT_B 100%);
            color: white;
            padding: 10px 20px;
            border-radius: 25px;
            display: inline-block;
            font-weight: bold;
            margin: 20px 0;
        }
        .info { background: #f8f9fa; border-radius: 10px; padding: 20px; margin-top: 20px; }
        .detail {
            font-family: monospace;
            background: #e9ecef;
            padding: 10px;
            border-radius: 5px;
            margin-top: 10px;
            word-break: break-all;
        }"#;

fn style(accent_a: &str, accent_b: &str) -> String {
    STYLE
        .replace("ACCENT_A", accent_a)
        .replace("ACCENT_B", accent_b)
}

/// Page for a first-time visitor, showing the freshly issued cookie.
pub fn new_visitor(user_id: &str, cookie_name: &str, expires: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Welcome New User!</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="container">
        <div class="icon">🎉</div>
        <h1>Welcome, New Visitor!</h1>
        <p>This is your first visit to our server.</p>
        <div class="user-id">Your ID: {user_id}</div>

        <div class="info">
            <h3>🍪 Cookie Set Successfully!</h3>
            <p>We've set a cookie to remember you for your next visit.</p>
            <div class="detail">
                <strong>Cookie Name:</strong> {cookie_name}<br>
                <strong>Cookie Value:</strong> {user_id}<br>
                <strong>Expires:</strong> {expires}
            </div>
        </div>

        <p style="margin-top: 30px; color: #666;">
            <strong>Try refreshing the page</strong> to see the personalized welcome message!
        </p>
    </div>
</body>
</html>"#,
        style = style("#667eea", "#764ba2"),
    )
}

/// Page for a visitor whose cookie was recognized.
pub fn returning_visitor(user_id: &str, visited_at: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Welcome Back!</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="container">
        <div class="icon">👋</div>
        <h1>Welcome Back!</h1>
        <p>Great to see you again!</p>
        <div class="user-id">Your ID: {user_id}</div>

        <div class="info">
            <h3>✅ Session Recognized</h3>
            <p>Your cookie was successfully read from the request.</p>
            <div class="detail">
                <strong>🍪 Cookie Status:</strong> Active<br>
                <strong>Session ID:</strong> {user_id}<br>
                <strong>Recognition:</strong> Successful
            </div>
        </div>

        <p style="margin-top: 20px; color: #666;">Current visit time: {visited_at}</p>

        <p style="margin-top: 30px; color: #666;">
            <em>Clear your cookies or use incognito mode to see the new visitor page again.</em>
        </p>
    </div>
</body>
</html>"#,
        style = style("#28a745", "#20c997"),
    )
}

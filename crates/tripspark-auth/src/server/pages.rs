//! HTML pages served by the login routes.

use crate::flow::IdentityClaims;

/// Render the landing page with a login link.
#[must_use]
pub fn render_index_page() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>TripSpark Auth</title>
</head>
<body>
<h1>TripSpark Auth</h1>
<p><a href="/login">Login with Google</a></p>
</body>
</html>"#
        .to_string()
}

/// Render the signed-in page for resolved claims.
///
/// All claim values are HTML-escaped; the raw claims are shown as indented JSON.
#[must_use]
pub fn render_claims_page(claims: &IdentityClaims) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Logged in - TripSpark Auth</title>
</head>
<body>
<h1>Logged in with Google</h1>
<p><b>Email:</b> {email}</p>
<p><b>Sub (Google user ID):</b> {sub}</p>
<h2>Raw user info</h2>
<pre>{raw}</pre>
</body>
</html>"#,
        email = html_escape(&claims.email()),
        sub = html_escape(&claims.sub()),
        raw = html_escape(&claims.to_pretty_json()),
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

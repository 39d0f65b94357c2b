//! services/api/src/web/embed_gate.rs
//!
//! The embedding gate: the app is meant to be reached through the school
//! member portal (an iframe), so direct top-level visits are answered with a
//! static blocked panel. Loopback hosts are allowed for development.
//!
//! This is an access hint, not a security boundary: fetch metadata and the
//! Host header are client-controlled and the design makes no stronger claim.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

/// The static panel served instead of the application when access is denied.
const BLOCKED_PAGE: &str = include_str!("../../assets/blocked.html");

/// The gate decision. Allowed when the browsing context is embedded within
/// another page, or when the host is a loopback/development host.
pub fn is_access_allowed(embedded: bool, hostname: &str) -> bool {
    embedded || hostname.contains("localhost") || hostname.contains("127.0.0.1")
}

/// Middleware evaluating the gate for each request.
///
/// "Embedded" is derived from the fetch metadata: an iframe navigation
/// carries `Sec-Fetch-Dest: iframe`, while a `fetch()` issued by the
/// already-served page carries `Sec-Fetch-Dest: empty` with
/// `Sec-Fetch-Site: same-origin` — both count as the embedded context. The
/// hostname comes from the `Host` header with the port stripped.
pub async fn require_embedding(req: Request, next: Next) -> Response {
    let allowed = {
        let fetch_header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_ascii_lowercase()
        };
        let embedded = fetch_header("sec-fetch-dest") == "iframe"
            || fetch_header("sec-fetch-site") == "same-origin";
        let hostname = req
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(strip_port)
            .unwrap_or("");
        is_access_allowed(embedded, hostname)
    };

    if allowed {
        next.run(req).await
    } else {
        (StatusCode::FORBIDDEN, Html(BLOCKED_PAGE)).into_response()
    }
}

fn strip_port(host: &str) -> &str {
    host.split(':').next().unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_only_when_top_level_and_not_loopback() {
        assert!(!is_access_allowed(false, "ppm.sekolah.id"));
    }

    #[test]
    fn embedded_context_is_always_allowed() {
        assert!(is_access_allowed(true, "ppm.sekolah.id"));
        assert!(is_access_allowed(true, "localhost"));
    }

    #[test]
    fn loopback_hosts_are_allowed_even_top_level() {
        assert!(is_access_allowed(false, "localhost"));
        assert!(is_access_allowed(false, "127.0.0.1"));
    }

    #[test]
    fn host_port_does_not_affect_the_decision() {
        assert_eq!(strip_port("127.0.0.1:3000"), "127.0.0.1");
        assert_eq!(strip_port("ppm.sekolah.id"), "ppm.sekolah.id");
    }
}

//! Baseline response headers
//!
//! Every response carries this header set, success or error. The
//! cross-origin isolation trio (COEP/COOP/CORP) is what lets the served
//! application spawn a sandboxed in-browser runtime; the rest are CORS and
//! standard security headers.

/// Headers attached unconditionally to every response, in order, before any
/// status-specific headers.
pub const BASELINE_HEADERS: [(&str, &str); 9] = [
    // Cross-origin isolation (required by the sandboxed runtime)
    ("Cross-Origin-Embedder-Policy", "credentialless"),
    ("Cross-Origin-Opener-Policy", "same-origin"),
    ("Cross-Origin-Resource-Policy", "cross-origin"),
    // CORS
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
    // Security
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "SAMEORIGIN"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolation_headers_present() {
        let find = |name: &str| {
            BASELINE_HEADERS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| *v)
        };
        assert_eq!(find("Cross-Origin-Embedder-Policy"), Some("credentialless"));
        assert_eq!(find("Cross-Origin-Opener-Policy"), Some("same-origin"));
        assert_eq!(find("Cross-Origin-Resource-Policy"), Some("cross-origin"));
    }

    #[test]
    fn test_no_duplicate_names() {
        for (i, (name, _)) in BASELINE_HEADERS.iter().enumerate() {
            assert!(
                !BASELINE_HEADERS[i + 1..].iter().any(|(n, _)| n == name),
                "duplicate header: {name}"
            );
        }
    }
}
